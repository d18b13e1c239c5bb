//! Geometric primitives for boxes and points.

use bytemuck::{Pod, Zeroable};
pub use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Integer, pixel-aligned bounding box. This is what the tracker accepts as
/// the initial selection and emits for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centroid, rounded toward the top-left like the selection itself.
    /// `None` if it does not fit in `i32`.
    #[inline]
    pub fn center(self) -> Option<IVec2> {
        Some(IVec2::new(
            self.x.checked_add(self.width / 2)?,
            self.y.checked_add(self.height / 2)?,
        ))
    }

    #[inline]
    pub fn size(self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// True if both dimensions are strictly positive.
    #[inline]
    pub fn has_area(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Axis-aligned rectangle with sub-pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from center and size.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x * 0.5,
            y: center.y - size.y * 0.5,
            width: size.x,
            height: size.y,
        }
    }

    /// Center point.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Size as a vector.
    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Area of the rectangle.
    #[inline]
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Compute intersection with another rectangle.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        if x1 < x2 && y1 < y2 {
            Some(Self::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Intersection-over-union, used to compare tracked boxes.
    pub fn iou(self, other: Self) -> f32 {
        let Some(inter) = self.intersection(other) else {
            return 0.0;
        };
        let union = self.area() + other.area() - inter.area();
        if union > 0.0 {
            inter.area() / union
        } else {
            0.0
        }
    }
}

impl From<BoundingBox> for Rect {
    fn from(b: BoundingBox) -> Self {
        Self::new(b.x as f32, b.y as f32, b.width as f32, b.height as f32)
    }
}

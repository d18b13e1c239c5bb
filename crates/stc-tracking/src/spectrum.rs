//! 2D discrete Fourier transforms over row-major f32 grids.
//!
//! Rows are transformed first, then columns (through a transpose), both with
//! plans from `rustfft`. Every row and column is independent, so the passes are
//! split across the rayon pool without affecting the result.

use std::fmt;
use std::sync::Arc;

use num_complex::Complex32;
use rayon::prelude::*;
use rustfft::{Fft, FftPlanner};

use crate::gray::GrayImage;

/// A dense complex matrix in row-major order, the frequency-domain
/// counterpart of a `GrayImage`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexMatrix {
    pub data: Vec<Complex32>,
    pub width: usize,
    pub height: usize,
}

impl ComplexMatrix {
    /// Elementwise product `self ⊙ other`.
    pub fn mul_elementwise(&self, other: &Self) -> Self {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| *a * *b)
                .collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Elementwise quotient `self / (other + eps)`, with `eps` added to the
    /// real part of the denominator.
    pub fn div_elementwise(&self, other: &Self, eps: f32) -> Self {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| *a / (*b + eps))
                .collect(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Forward and inverse plans for one grid size.
#[derive(Clone)]
pub struct Fft2d {
    width: usize,
    height: usize,
    row_fwd: Arc<dyn Fft<f32>>,
    row_inv: Arc<dyn Fft<f32>>,
    col_fwd: Arc<dyn Fft<f32>>,
    col_inv: Arc<dyn Fft<f32>>,
}

impl fmt::Debug for Fft2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fft2d")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Fft2d {
    pub fn new(width: usize, height: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            width,
            height,
            row_fwd: planner.plan_fft_forward(width),
            row_inv: planner.plan_fft_inverse(width),
            col_fwd: planner.plan_fft_forward(height),
            col_inv: planner.plan_fft_inverse(height),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Unnormalized forward transform of a real grid.
    pub fn forward(&self, input: &GrayImage) -> ComplexMatrix {
        debug_assert_eq!(
            (input.width as usize, input.height as usize),
            (self.width, self.height)
        );
        let mut m = ComplexMatrix {
            data: input.data.iter().map(|&v| Complex32::new(v, 0.0)).collect(),
            width: self.width,
            height: self.height,
        };
        self.transform(&mut m, &self.row_fwd, &self.col_fwd);
        m
    }

    /// Inverse transform keeping only the real component, scaled by `1/(W*H)`
    /// so that `inverse_real(forward(x)) == x`.
    pub fn inverse_real(&self, spectrum: &ComplexMatrix) -> GrayImage {
        let mut m = spectrum.clone();
        self.transform(&mut m, &self.row_inv, &self.col_inv);
        let norm = 1.0 / (self.width * self.height) as f32;
        GrayImage {
            data: m.data.iter().map(|c| c.re * norm).collect(),
            width: self.width as u32,
            height: self.height as u32,
        }
    }

    fn transform(&self, m: &mut ComplexMatrix, rows: &Arc<dyn Fft<f32>>, cols: &Arc<dyn Fft<f32>>) {
        m.data
            .par_chunks_mut(self.width)
            .for_each(|row| rows.process(row));

        let mut transposed = transpose(&m.data, self.width, self.height);
        transposed
            .par_chunks_mut(self.height)
            .for_each(|col| cols.process(col));
        m.data = transpose(&transposed, self.height, self.width);
    }
}

/// Transpose a row-major `width x height` buffer into a `height x width` one.
fn transpose(data: &[Complex32], width: usize, height: usize) -> Vec<Complex32> {
    let mut out = vec![Complex32::new(0.0, 0.0); data.len()];
    for y in 0..height {
        for x in 0..width {
            out[x * height + y] = data[y * width + x];
        }
    }
    out
}

//! End-to-end tracking scenarios on synthetic sequences.

use stc_core::{BoundingBox, FrameBuffer, IVec2, PixelFormat, Rect, StcError};
use stc_tracking::{GrayImage, StcParams, StcTracker};

// ── Helpers ────────────────────────────────────────────────────

fn square_frame(size: u32, left: u32, top: u32, side: u32) -> FrameBuffer {
    let mut frame = FrameBuffer::new(size, size, PixelFormat::Gray8);
    for y in 0..size {
        let row = frame.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            let x = x as u32;
            let inside = (left..left + side).contains(&x) && (top..top + side).contains(&y);
            *px = if inside { 230 } else { 25 };
        }
    }
    frame
}

fn box_center(b: BoundingBox) -> IVec2 {
    IVec2::new(b.x + b.width / 2, b.y + b.height / 2)
}

// ── Static target ──────────────────────────────────────────────

#[test]
fn bright_square_stays_put_over_copies() {
    let frame = square_frame(100, 40, 40, 20);
    let mut tracker = StcTracker::default();
    tracker
        .initialize(BoundingBox::new(40, 40, 20, 20), &frame)
        .unwrap();

    for _ in 0..3 {
        let copy = frame.clone();
        let bbox = tracker.update(&copy).unwrap();
        let c = box_center(bbox);
        assert!((c.x - 50).abs() <= 1, "center x drifted: {:?}", bbox);
        assert!((c.y - 50).abs() <= 1, "center y drifted: {:?}", bbox);
        assert!((bbox.width - 20).abs() <= 1);
        assert!((bbox.height - 20).abs() <= 1);
    }
    let state = tracker.state().unwrap();
    assert_eq!(state.scale(), 1.0);
    let truth = Rect::new(40.0, 40.0, 20.0, 20.0);
    assert!(state.rect().iou(truth) > 0.8);
}

#[test]
fn long_static_sequence_reaches_fixed_point() {
    let frame = square_frame(100, 40, 40, 20);
    let mut tracker = StcTracker::default();
    tracker
        .initialize(BoundingBox::new(40, 40, 20, 20), &frame)
        .unwrap();

    let boxes: Vec<BoundingBox> = (0..15).map(|_| tracker.update(&frame).unwrap()).collect();
    let settled = boxes[boxes.len() - 1];
    assert!(boxes[3..].iter().all(|b| *b == settled));
    let state = tracker.state().unwrap();
    assert!((state.scale() - 1.0).abs() < 1e-3);
    assert_eq!(state.frame_counter(), 0);
}

#[test]
fn caller_frame_is_not_modified() {
    let frame = square_frame(100, 40, 40, 20);
    let pristine = frame.data.clone();
    let mut tracker = StcTracker::default();
    tracker
        .initialize(BoundingBox::new(40, 40, 20, 20), &frame)
        .unwrap();
    tracker.update(&frame).unwrap();
    assert_eq!(frame.data, pristine);
}

// ── Session errors ─────────────────────────────────────────────

#[test]
fn zero_width_selection_leaves_session_uninitialized() {
    let frame = square_frame(100, 40, 40, 20);
    let mut tracker = StcTracker::new(StcParams::default());
    let err = tracker
        .initialize(BoundingBox::new(40, 40, 0, 20), &frame)
        .unwrap_err();
    assert!(matches!(err, StcError::InvalidSelection { .. }));
    assert!(!tracker.is_initialized());
    assert_eq!(tracker.update(&frame).unwrap_err(), StcError::NotInitialized);
}

#[test]
fn resized_frame_is_rejected() {
    let mut tracker = StcTracker::default();
    tracker
        .initialize(BoundingBox::new(40, 40, 20, 20), &square_frame(100, 40, 40, 20))
        .unwrap();
    let err = tracker.update(&square_frame(90, 40, 40, 20)).unwrap_err();
    assert!(matches!(err, StcError::FrameSizeMismatch { .. }));
    // The session survives and keeps tracking correctly sized frames.
    assert!(tracker.update(&square_frame(100, 40, 40, 20)).is_ok());
}

#[test]
fn reset_drops_session() {
    let mut tracker = StcTracker::default();
    let frame = GrayImage::from_fn(50, 50, |x, y| ((x * y) % 200) as f32);
    tracker.initialize(BoundingBox::new(10, 10, 12, 12), &frame).unwrap();
    assert!(tracker.is_initialized());
    tracker.reset();
    assert!(!tracker.is_initialized());
}

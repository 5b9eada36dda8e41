//! # Collision Detection
//!
//! Axis-aligned bounding-box tests used for actor contact and button hits.

use macroquad::math::{Rect, Vec2};

/// Returns true when two boxes overlap.
///
/// Touching edges count as overlap: boxes sharing only a border, or a
/// zero-width box lying on the other's border, return true.
///
/// # Examples
///
/// ```
/// use hideseek::overlap;
/// use macroquad::math::Rect;
///
/// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(overlap(&a, &Rect::new(5.0, 5.0, 10.0, 10.0)));
/// assert!(overlap(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
/// assert!(!overlap(&a, &Rect::new(10.5, 0.0, 10.0, 10.0)));
/// ```
pub fn overlap(a: &Rect, b: &Rect) -> bool {
    a.x <= b.x + b.w && b.x <= a.x + a.w && a.y <= b.y + b.h && b.y <= a.y + a.h
}

/// Returns true when `point` lies inside `rect`, borders included.
pub fn contains(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.x && point.x <= rect.x + rect.w && point.y >= rect.y && point.y <= rect.y + rect.h
}

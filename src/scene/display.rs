use egui::{Pos2, Rect, Vec2};

use super::error::SceneError;

/// Logical size of the render surface a scene is built for.
///
/// Both dimensions are finite and non-negative; zero is allowed and marks a degenerate surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplaySize {
    width: f32,
    height: f32,
}

impl DisplaySize {
    pub fn new(
        width: f32,
        height: f32,
    ) -> Result<Self, SceneError> {
        let valid = |len: f32| len.is_finite() && len >= 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(SceneError::InvalidDisplaySize { width, height })
        }
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    /// true if nothing can be drawn on a surface of this size
    pub fn is_degenerate(&self) -> bool { self.width == 0.0 || self.height == 0.0 }

    pub fn to_vec2(&self) -> Vec2 { Vec2::new(self.width, self.height) }

    /// The whole surface in scene-local coordinates (TOP / LEFT corner is 0/0)
    pub fn rect(&self) -> Rect { Rect::from_min_size(Pos2::ZERO, self.to_vec2()) }

    pub fn center(&self) -> Pos2 { Pos2::new(self.width / 2.0, self.height / 2.0) }
}

/// Sizes measured by the host framework (e.g. a painter's clip rect) can be slightly negative or NaN
/// while a window is being resized. They are clamped at 0.
impl From<Vec2> for DisplaySize {
    fn from(value: Vec2) -> Self {
        let clamp = |len: f32| if len.is_finite() { len.max(0.0) } else { 0.0 };
        Self {
            width: clamp(value.x),
            height: clamp(value.y),
        }
    }
}

use crate::entity::Color;
use crate::math::Vec2;

/// 2D drawing target the simulation renders onto
pub trait Surface {
    /// Clear the `width` x `height` region at the origin
    fn clear(&mut self, width: f64, height: f64);

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color);

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, color: Color);
}

/// A single recorded draw operation
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f64, height: f64 },
    Circle { center: Vec2, radius: f64, color: Color },
    Segment { from: Vec2, to: Vec2, color: Color },
}

/// Surface that records calls instead of drawing
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.calls.push(DrawCall::Segment { from, to, color });
    }
}

//! Drawing and viewport seams the animator renders through.

use paperbuddy_core::{Rgb, Size};

/// A vertical two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    /// Y coordinate of the first stop.
    pub y0: f32,
    /// Y coordinate of the second stop.
    pub y1: f32,
    /// Color at `y0` and above.
    pub from: Rgb,
    /// Color at `y1` and below.
    pub to: Rgb,
}

impl LinearGradient {
    /// Gradient spanning `0..height`.
    pub fn vertical(height: f32, from: Rgb, to: Rgb) -> Self {
        Self {
            y0: 0.0,
            y1: height,
            from,
            to,
        }
    }

    /// Color at the given y coordinate.
    pub fn color_at(&self, y: f32) -> Rgb {
        let span = self.y1 - self.y0;
        if span == 0.0 {
            return self.from;
        }
        self.from.lerp(self.to, (y - self.y0) / span)
    }
}

/// A 2D drawing surface in the style of a canvas context.
///
/// Calls on a zero-size surface are no-ops.
pub trait Surface {
    /// Current dimensions in pixels.
    fn size(&self) -> Size;

    /// Resize the surface. Existing content is discarded.
    fn set_size(&mut self, size: Size);

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Fill the whole surface with a gradient, honoring the global alpha.
    fn fill_gradient(&mut self, gradient: &LinearGradient);

    /// Opacity applied to subsequent fills, 0.0-1.0.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Fill a circle centered at (`cx`, `cy`).
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb);
}

/// Source of the visible viewport dimensions.
pub trait Viewport {
    fn inner_size(&self) -> Size;
}

impl Viewport for Size {
    fn inner_size(&self) -> Size {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_stops() {
        let gradient = LinearGradient::vertical(100.0, Rgb::BLACK, Rgb::WHITE);
        assert_eq!(gradient.color_at(0.0), Rgb::BLACK);
        assert_eq!(gradient.color_at(100.0), Rgb::WHITE);
        assert_eq!(gradient.color_at(50.0), Rgb::new(128, 128, 128));
        assert_eq!(gradient.color_at(-10.0), Rgb::BLACK);
        assert_eq!(gradient.color_at(500.0), Rgb::WHITE);
    }

    #[test]
    fn test_degenerate_gradient() {
        let gradient = LinearGradient::vertical(0.0, Rgb::BLACK, Rgb::WHITE);
        assert_eq!(gradient.color_at(0.0), Rgb::BLACK);
    }

    #[test]
    fn test_size_viewport() {
        let size = Size::new(320, 240);
        assert_eq!(size.inner_size(), size);
    }
}

//! Software RGB surface.

use paperbuddy_core::{Rgb, Size};

use crate::surface::{LinearGradient, Surface};

/// An in-memory pixel grid implementing [`Surface`].
#[derive(Debug, Clone)]
pub struct PixelSurface {
    size: Size,
    pixels: Vec<Rgb>,
    global_alpha: f32,
}

impl Default for PixelSurface {
    fn default() -> Self {
        Self::new(Size::default())
    }
}

impl PixelSurface {
    /// Create a black surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb::BLACK; size.width as usize * size.height as usize],
            global_alpha: 1.0,
        }
    }

    /// Color at (`x`, `y`), or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size.width as usize + x as usize
    }

    fn paint(&mut self, x: u32, y: u32, color: Rgb, alpha: f32) {
        let idx = self.index(x, y);
        if let Some(px) = self.pixels.get_mut(idx) {
            *px = px.blend(color, alpha);
        }
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.pixels.clear();
        self.pixels
            .resize(size.width as usize * size.height as usize, Rgb::BLACK);
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    fn fill_gradient(&mut self, gradient: &LinearGradient) {
        let alpha = self.global_alpha;
        for y in 0..self.size.height {
            // Sample at the pixel center
            let color = gradient.color_at(y as f32 + 0.5);
            for x in 0..self.size.width {
                self.paint(x, y, color, alpha);
            }
        }
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        if radius <= 0.0 || self.global_alpha <= 0.0 || self.size.is_empty() {
            return;
        }

        // Half a pixel of anti-aliasing around the edge
        let reach = radius + 0.5;
        let clamp_x = |v: f32| (v.max(0.0) as u32).min(self.size.width);
        let clamp_y = |v: f32| (v.max(0.0) as u32).min(self.size.height);
        let (x0, x1) = (clamp_x((cx - reach).floor()), clamp_x((cx + reach).ceil()));
        let (y0, y1) = (clamp_y((cy - reach).floor()), clamp_y((cy + reach).ceil()));

        let alpha = self.global_alpha;
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let coverage = (reach - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.paint(x, y, color, alpha * coverage);
                }
            }
        }
    }
}

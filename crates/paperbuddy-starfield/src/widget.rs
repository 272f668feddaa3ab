//! Terminal presentation of a [`PixelSurface`].

use paperbuddy_core::{Rgb, Size};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::pixel::PixelSurface;
use crate::surface::Viewport;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: char = '▀';

/// Renders a surface with two vertically stacked pixels per cell.
#[derive(Debug, Clone, Copy)]
pub struct StarFieldView<'a> {
    surface: &'a PixelSurface,
}

impl<'a> StarFieldView<'a> {
    pub fn new(surface: &'a PixelSurface) -> Self {
        Self { surface }
    }
}

impl Widget for StarFieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as u32;
                let y = row as u32 * 2;
                let top = self.surface.pixel(x, y).unwrap_or(Rgb::BLACK);
                let bottom = self.surface.pixel(x, y + 1).unwrap_or(Rgb::BLACK);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(HALF_BLOCK)
                        .set_fg(top.into())
                        .set_bg(bottom.into());
                }
            }
        }
    }
}

/// A terminal area seen as a pixel viewport.
impl Viewport for Rect {
    fn inner_size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32 * 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;
    use ratatui::style::Color;

    #[test]
    fn test_rect_viewport_doubles_rows() {
        assert_eq!(Rect::new(0, 0, 80, 24).inner_size(), Size::new(80, 48));
    }

    #[test]
    fn test_half_block_mapping() {
        let mut surface = PixelSurface::new(Size::new(2, 2));
        surface.fill_circle(0.5, 0.5, 0.5, Rgb::WHITE);

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        StarFieldView::new(&surface).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(1, 0)].fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_area_larger_than_surface() {
        let surface = PixelSurface::new(Size::new(1, 1));
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        StarFieldView::new(&surface).render(area, &mut buf);
        assert_eq!(buf[(2, 1)].symbol(), "▀");
        assert_eq!(buf[(2, 1)].bg, Color::Rgb(0, 0, 0));
    }
}

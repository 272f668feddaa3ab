//! Hero text drawn over the starfield.

use paperbuddy_core::{AnimationSpeed, Palette, Rgb};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
};

const HEADLINE: &str = "Generate Exam Papers in ";
const HEADLINE_ACCENT: &str = "Seconds";
const TAGLINE: &str = "The ultimate AI tool for teachers and coaching institutes.";

/// Render the wordmark, headline, tagline, and key help centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, speed: AnimationSpeed) {
    let white = Color::from(Rgb::WHITE);
    let purple = Color::from(Palette::ACCENT_PURPLE);
    let cyan = Color::from(Palette::ACCENT_CYAN);
    let dim = Color::from(Palette::SLATE_300);

    let chunks = Layout::vertical([
        Constraint::Fill(1),   // Top padding
        Constraint::Length(1), // Wordmark
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Headline
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Tagline
        Constraint::Fill(1),   // Bottom padding
        Constraint::Length(1), // Help text
    ])
    .split(area);

    let wordmark = Line::from(vec![
        Span::styled("Paper", Style::new().fg(white).bold()),
        Span::styled("Buddy", Style::new().fg(purple).bold()),
    ])
    .centered();
    frame.render_widget(wordmark, chunks[1]);

    let headline = Line::from(vec![
        Span::styled(HEADLINE, Style::new().fg(white)),
        Span::styled(HEADLINE_ACCENT, Style::new().fg(cyan).bold()),
    ])
    .centered();
    frame.render_widget(headline, chunks[3]);

    let tagline = Line::from(TAGLINE).style(Style::new().fg(dim)).centered();
    frame.render_widget(tagline, chunks[5]);

    let help = Line::from(vec![
        "q".bold().fg(cyan),
        " quit  ".fg(dim),
        "s".bold().fg(cyan),
        format!(" speed ({})  ", speed.label()).fg(dim),
        "h".bold().fg(cyan),
        " hide text".fg(dim),
    ])
    .centered();
    frame.render_widget(help, chunks[7]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, AnimationSpeed::Fast);
            })
            .unwrap();
        terminal
    }

    fn rendered_text(width: u16, height: u16) -> String {
        rendered(width, height)
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_hero_lines_present() {
        let text = rendered_text(80, 12);
        assert!(text.contains("PaperBuddy"));
        assert!(text.contains("Generate Exam Papers in Seconds"));
        assert!(text.contains("speed (fast)"));
    }

    #[test]
    fn test_tagline_uses_slate_text() {
        let terminal = rendered(80, 12);
        let buf = terminal.backend().buffer();
        let tagline = buf
            .content()
            .iter()
            .find(|cell| cell.symbol() == "T")
            .unwrap();
        assert_eq!(tagline.fg, Color::from(Palette::SLATE_300));
    }

    #[test]
    fn test_hero_in_tiny_area() {
        // Must not panic when the terminal is smaller than the layout
        rendered_text(4, 2);
    }
}

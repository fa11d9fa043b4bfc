#[cfg(test)]
mod tests {
    use super::super::view_layout::{ColorScheme, Styles, ViewLayout, tone_color};
    use crate::formatters::StatusTone;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        buffer::Buffer,
        style::{Color, Modifier},
    };

    #[test]
    fn test_view_layout_basic() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let layout = ViewLayout::new("Trademark Detail");
                layout.render(f, f.area(), |_f, area| {
                    assert!(area.height > 0);
                    assert!(area.width > 0);
                });
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Trademark Detail"));
        assert!(buffer_contains_text(buffer, "Esc: Back"));
    }

    #[test]
    fn test_view_layout_with_subtitle_and_status() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let layout = ViewLayout::new("Title")
                    .with_subtitle("Walt Disney Co")
                    .with_status_text("c: Copy mark");
                layout.render(f, f.area(), |_f, _area| {});
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Walt Disney Co"));
        assert!(buffer_contains_text(buffer, "c: Copy mark"));
        assert!(!buffer_contains_text(buffer, "Esc: Back"));
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(tone_color(StatusTone::Green), Color::Green);
        assert_eq!(tone_color(StatusTone::Yellow), Color::Yellow);
        assert_eq!(tone_color(StatusTone::Red), Color::Red);
        assert_eq!(tone_color(StatusTone::Blue), Color::Blue);
        assert_eq!(tone_color(StatusTone::Gray), Color::Gray);
    }

    #[test]
    fn test_styles() {
        let title_style = Styles::title();
        assert_eq!(title_style.fg, Some(ColorScheme::PRIMARY));
        assert!(title_style.add_modifier.contains(Modifier::BOLD));

        assert_eq!(Styles::selected().bg, Some(ColorScheme::SELECTION));
        assert_eq!(Styles::border(true).fg, Some(ColorScheme::FOCUS));
        assert_eq!(Styles::border(false).fg, Some(ColorScheme::TEXT_DIM));
        assert_eq!(Styles::status(StatusTone::Red).fg, Some(Color::Red));
        assert_eq!(Styles::error().fg, Some(ColorScheme::ERROR));
    }

    fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }
}

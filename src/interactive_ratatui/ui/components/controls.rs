use crate::interactive_ratatui::domain::models::DisplayMode;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Filter / Share / Menu buttons. Only Share does anything.
pub fn render_buttons(f: &mut Frame, area: Rect) {
    let button = |key: &'static str, label: &'static str| {
        vec![
            Span::styled(format!("[{key}]"), Styles::action_key()),
            Span::raw(format!(" {label}  ")),
        ]
    };

    let mut spans = button("f", "Filter");
    spans.extend(button("y", "Share"));
    spans.extend(button("m", "Menu"));

    let buttons = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Styles::dimmed()));
    f.render_widget(buttons, area);
}

/// Two-state Grid/List switch
pub fn render_display_toggle(f: &mut Frame, area: Rect, mode: DisplayMode) {
    let option = |this: DisplayMode| {
        if this == mode {
            Span::styled(
                format!(" {} ", this.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", this.label()), Styles::dimmed())
        }
    };

    let toggle = Paragraph::new(Line::from(vec![
        option(DisplayMode::Grid),
        Span::raw(" "),
        option(DisplayMode::List),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Display (v) ")
            .borders(Borders::ALL)
            .border_style(Styles::dimmed()),
    );
    f.render_widget(toggle, area);
}

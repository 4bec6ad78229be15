use ratatui::style::{Color, Modifier, Style};

use crate::catalog::format::LabelSegment;

/// Styles used by the checklist
pub struct Theme {
    pub focused: Style,
    pub checked: Style,
    pub error: Style,
    pub muted: Style,
    pub title: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            checked: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Style for one colored run of a label
    pub fn segment_style(&self, segment: &LabelSegment) -> Style {
        match segment.color {
            Some(rgb) => Style::default().fg(Color::Rgb(rgb.r, rgb.g, rgb.b)),
            None => Style::default(),
        }
    }

    pub fn checkbox(checked: bool) -> &'static str {
        if checked {
            "☑"
        } else {
            "☐"
        }
    }
}

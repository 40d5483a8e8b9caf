use ratatui::{
    prelude::{Buffer, Rect},
    text::Line,
    widgets::Widget,
};

use crate::view::widgets::style;

/// Single-line clickable label, drawn as `[ label ]`.
#[derive(Debug)]
pub struct ButtonDisplay<'a> {
    label: &'a str,
}

impl<'a> ButtonDisplay<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }

    pub fn width(&self) -> u16 {
        u16::try_from(self.label.chars().count() + 4).unwrap_or(u16::MAX)
    }
}

impl Widget for ButtonDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Line::styled(format!("[ {} ]", self.label), style::BUTTON).render(area, buf);
    }
}

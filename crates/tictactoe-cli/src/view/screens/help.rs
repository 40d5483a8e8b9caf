use crossterm::event::{Event, MouseEventKind};
use ratatui::{
    Frame,
    layout::Constraint,
    text::Line,
    widgets::{Block as BlockWidget, Clear, Padding},
};
use ratatui_runtime::{Screen, ScreenTransition};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, style};

/// Popup listing every key binding. Any key press or click closes it.
#[derive(Debug)]
pub struct HelpScreen {
    bindings: &'static [KeyBinding<'static>],
}

impl HelpScreen {
    pub fn new(bindings: &'static [KeyBinding<'static>]) -> Self {
        Self { bindings }
    }
}

impl Screen for HelpScreen {
    fn handle_event(&mut self, event: &Event) -> ScreenTransition {
        let clicked = event
            .as_mouse_event()
            .is_some_and(|event| matches!(event.kind, MouseEventKind::Down(_)));
        if event.is_key_press() || clicked {
            ScreenTransition::Pop
        } else {
            ScreenTransition::Stay
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let display = KeyBindingDisplay::new(self.bindings).one_per_line().block(
            BlockWidget::bordered()
                .title(Line::from(" Help ").centered())
                .title_bottom(Line::from(" press any key ").centered())
                .padding(Padding::horizontal(1))
                .border_style(style::FOCUSED_BORDER)
                .style(style::DEFAULT),
        );
        let area = frame.area().centered(
            Constraint::Length(display.width()),
            Constraint::Length(display.height()),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(display, area);
    }
}

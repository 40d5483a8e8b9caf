use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

/// Keys that trigger an action, and a short description of the action.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
    one_per_line: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> KeyBindingDisplay<'a> {
    /// Shows all bindings on a single centered line.
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self {
            bindings,
            one_per_line: false,
            block: None,
        }
    }

    /// Shows one binding per line, descriptions aligned in a column.
    pub fn one_per_line(self) -> Self {
        Self {
            one_per_line: true,
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let width = if self.one_per_line {
            let descriptions = self.bindings.iter().map(|(_, desc)| desc.len());
            self.keys_width() + 1 + descriptions.max().unwrap_or(0)
        } else {
            self.inline_spans().iter().map(Span::width).sum()
        };
        u16::try_from(width).unwrap_or(u16::MAX)
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let lines = if self.one_per_line {
            self.bindings.len()
        } else {
            1
        };
        u16::try_from(lines).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }

    fn keys_width(&self) -> usize {
        self.bindings
            .iter()
            .map(|&(keys, _)| Self::key_spans(keys).map(|span| span.width()).sum::<usize>())
            .max()
            .unwrap_or(0)
    }

    fn key_spans(keys: &'a [&'a str]) -> impl Iterator<Item = Span<'a>> {
        keys.iter().enumerate().flat_map(|(i, key)| {
            let separator = (i > 0).then(|| Span::styled("/", KEY_SEPARATOR_STYLE));
            separator
                .into_iter()
                .chain([Span::styled(*key, KEY_STYLE)])
        })
    }

    fn inline_spans(&self) -> Vec<Span<'a>> {
        let mut spans = vec![];
        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", ITEM_SEPARATOR_STYLE));
            }
            spans.extend(Self::key_spans(keys));
            spans.push(Span::from(" "));
            spans.push(Span::styled(desc, DESCRIPTION_STYLE));
        }
        spans
    }

    fn column_lines(&self) -> Vec<Line<'a>> {
        let keys_width = self.keys_width();
        self.bindings
            .iter()
            .copied()
            .map(|(keys, desc)| {
                let mut spans: Vec<_> = Self::key_spans(keys).collect();
                let used: usize = spans.iter().map(Span::width).sum();
                spans.push(Span::from(" ".repeat(keys_width - used + 1)));
                spans.push(Span::styled(desc, DESCRIPTION_STYLE));
                Line::from(spans)
            })
            .collect()
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const KEY_SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);
const ITEM_SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        if self.one_per_line {
            Text::from(self.column_lines()).render(area, buf);
        } else {
            Line::from(self.inline_spans()).centered().render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BINDINGS: &[KeyBinding<'static>] = &[(&["q", "Esc"], "Quit"), (&["r"], "Reverse")];

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_owned()
    }

    #[test]
    fn test_inline() {
        let display = KeyBindingDisplay::new(BINDINGS);
        assert_eq!(display.width(), 22);
        assert_eq!(display.height(), 1);

        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "q/Esc Quit | r Reverse");
    }

    #[test]
    fn test_one_per_line() {
        let display = KeyBindingDisplay::new(BINDINGS).one_per_line();
        assert_eq!(display.height(), 2);

        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "q/Esc Quit");
        assert_eq!(row_text(&buf, 1), "r     Reverse");
    }
}

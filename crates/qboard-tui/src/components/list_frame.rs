//! Generic bordered list container and row framing
//!
//! Both pieces are purely presentational: they wrap arbitrary child content
//! without inspecting it. `ListFrame` draws the outer border around an
//! ordered sequence of lines; `ListRow` frames one item's spans with
//! horizontal padding and a bottom rule under every row except the last.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered container around an ordered sequence of child lines.
///
/// Children render in the order given, unmodified. Zero children is valid
/// and draws an empty frame.
pub struct ListFrame<'a> {
    children: Vec<Line<'a>>,
    title: Option<Span<'a>>,
    border_color: Color,
}

impl<'a> ListFrame<'a> {
    pub fn new(children: Vec<Line<'a>>) -> Self {
        Self {
            children,
            title: None,
            border_color: Color::DarkGray,
        }
    }

    pub fn title(mut self, title: Span<'a>) -> Self {
        self.title = Some(title);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Total content height in lines, before scrolling.
    pub fn content_height(&self) -> usize {
        self.children.len()
    }

    /// Render the frame, scrolled down by `scroll` lines.
    pub fn render(self, frame: &mut Frame, area: Rect, scroll: u16) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));
        if let Some(title) = self.title {
            block = block.title(title);
        }

        let paragraph = Paragraph::new(self.children)
            .block(block)
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

/// Row framing for one item's worth of child spans.
pub struct ListRow<'a> {
    children: Vec<Span<'a>>,
    last: bool,
}

impl<'a> ListRow<'a> {
    pub fn new(children: Vec<Span<'a>>) -> Self {
        Self {
            children,
            last: false,
        }
    }

    /// Mark this as the final row; the bottom rule is omitted. A pure
    /// style distinction, nothing about the data changes.
    pub fn last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }

    /// Produce the framed lines: padded content, then a rule spanning
    /// `width` columns unless this is the last row.
    pub fn into_lines(self, width: u16) -> Vec<Line<'a>> {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(self.children);

        let mut lines = vec![Line::from(spans)];
        if !self.last {
            lines.push(Line::from(Span::styled(
                "─".repeat(width as usize),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines
    }
}

//! TUI rendering logic
//!
//! Exactly one of three surfaces is drawn per frame, matching the view
//! state: the loading box, the error panel, or the queue list.

use crate::app::App;
use crate::components::{render_error_panel, ListFrame, ListRow};
use qboard_core::{QueueEnvelope, QueueView, Task};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ID_WIDTH: usize = 20;
const FILE_WIDTH: usize = 16;
const NEXT_RUN_WIDTH: usize = 27;

/// Render the full UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    match &app.view {
        QueueView::Loading => {
            app.spinner.tick();
            let spinner = app.spinner.render();
            render_loading(frame, area, spinner);
        }
        QueueView::Failed(message) => {
            render_error_panel(frame, centered_box(area, 7), message);
        }
        QueueView::Loaded(envelope) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(area);

            app.max_scroll = render_queue(frame, chunks[0], envelope, app.scroll);
            render_status_bar(frame, chunks[1], envelope.tasks.len());
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect, spinner: Span<'_>) {
    let boxed = centered_box(area, 5);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " qboard ",
            Style::default().fg(Color::Cyan).bold(),
        ));

    let inner = block.inner(boxed);
    frame.render_widget(block, boxed);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let spinner_line = Line::from(vec![
        Span::raw("  "),
        spinner,
        Span::raw("  "),
        Span::styled("Fetching queue…", Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(spinner_line), rows[1]);
}

/// Render the queue list; returns the maximum scroll offset.
fn render_queue(frame: &mut Frame, area: Rect, envelope: &QueueEnvelope, scroll: usize) -> usize {
    let inner_width = area.width.saturating_sub(2);

    // Header row plus one row per task, server order preserved.
    let mut children = ListRow::new(header_spans()).into_lines(inner_width);
    let count = envelope.tasks.len();
    for (i, task) in envelope.tasks.iter().enumerate() {
        children.extend(
            ListRow::new(task_spans(task))
                .last(i + 1 == count)
                .into_lines(inner_width),
        );
    }

    let list = ListFrame::new(children)
        .title(Span::styled(
            format!(" queue ({}) ", count),
            Style::default().fg(Color::White).bold(),
        ))
        .border_color(Color::Cyan);

    let visible = area.height.saturating_sub(2) as usize;
    let max_scroll = list.content_height().saturating_sub(visible);
    list.render(frame, area, scroll.min(max_scroll) as u16);

    max_scroll
}

fn render_status_bar(frame: &mut Frame, area: Rect, count: usize) {
    let line = Line::from(Span::styled(
        format!(" q quit · j/k scroll · {} tasks", count),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn header_spans() -> Vec<Span<'static>> {
    let style = Style::default().fg(Color::White).bold();
    vec![
        Span::styled(pad("Task ID", ID_WIDTH), style),
        Span::styled(pad("Task File", FILE_WIDTH), style),
        Span::styled(pad("Next Run Time", NEXT_RUN_WIDTH), style),
        Span::styled("Trigger".to_string(), style),
    ]
}

fn task_spans(task: &Task) -> Vec<Span<'_>> {
    let next_run_style = if task.next_run_time.is_some() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    vec![
        Span::styled(
            pad(&task.task_id, ID_WIDTH),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            pad(&task.task_file, FILE_WIDTH),
            Style::default().fg(Color::White),
        ),
        Span::styled(pad(task.next_run_display(), NEXT_RUN_WIDTH), next_run_style),
        Span::styled(task.trigger.clone(), Style::default().fg(Color::White)),
    ]
}

/// Pad or truncate a cell to a fixed column width plus one space.
fn pad(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count > width {
        let truncated: String = s.chars().take(width - 1).collect();
        format!("{}… ", truncated)
    } else {
        format!("{:<width$} ", s, width = width)
    }
}

fn centered_box(area: Rect, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(height),
            Constraint::Percentage(40),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use qboard_core::TaskKwargs;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn task(id: &str, next_run_time: Option<&str>) -> Task {
        Task {
            task_id: id.to_string(),
            task_file: "send_mail".to_string(),
            next_run_time: next_run_time.map(str::to_string),
            trigger: "cron[hour='9']".to_string(),
            args: vec!["inbox".to_string()],
            kwargs: TaskKwargs {
                prefix: "[mail]".to_string(),
                suffix: "(auto)".to_string(),
            },
        }
    }

    fn loaded_app(tasks: Vec<Task>) -> App {
        let mut app = App::new();
        app.resolve_fetch(Ok(QueueEnvelope {
            status: "success".to_string(),
            message: "List of all tasks".to_string(),
            tasks,
        }));
        app
    }

    fn draw(app: &mut App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_loading_shows_only_spinner_box() {
        let mut app = App::new();
        let text = draw(&mut app);

        assert!(text.contains("Fetching queue"));
        assert!(!text.contains("Task ID"));
    }

    #[test]
    fn test_failed_shows_only_error_panel() {
        let mut app = App::new();
        app.resolve_fetch(Err(qboard_core::ClientError::Status {
            url: "http://127.0.0.1:8000/queue/".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        }));
        let text = draw(&mut app);

        assert!(text.contains("502"));
        assert!(!text.contains("Task ID"));
        assert!(!text.contains("Fetching queue"));
    }

    #[test]
    fn test_loaded_renders_header_and_rows_in_order() {
        let mut app = loaded_app(vec![
            task("alpha", Some("2026-08-26T09:00:00+00:00")),
            task("bravo", None),
        ]);
        let text = draw(&mut app);

        assert!(text.contains("Task ID"));
        assert!(text.contains("Task File"));
        assert!(text.contains("Next Run Time"));
        assert!(text.contains("Trigger"));

        let alpha = text.find("alpha").unwrap();
        let bravo = text.find("bravo").unwrap();
        assert!(alpha < bravo);

        assert!(text.contains("2026-08-26T09:00:00+00:00"));
        assert!(text.contains("not scheduled"));
    }

    #[test]
    fn test_empty_queue_renders_header_without_rows_or_error() {
        let mut app = loaded_app(Vec::new());
        let text = draw(&mut app);

        assert!(text.contains("Task ID"));
        assert!(text.contains("queue (0)"));
        assert!(!text.contains("fetch failed"));
    }

    #[test]
    fn test_pad_truncates_long_cells() {
        // Width 5 plus the single separator space.
        assert_eq!(pad("abc", 5), "abc   ");
        let padded = pad("abcdefghij", 5);
        assert!(padded.starts_with("abcd…"));
    }
}

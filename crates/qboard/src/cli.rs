//! One-shot output formatters for the queue
//!
//! Same display rules as the TUI: server order preserved, absent next run
//! times rendered as the fixed placeholder.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use qboard_core::{QueueEnvelope, TaskEnvelope};

/// Format the queue listing as a table (human) or JSON.
pub fn format_queue(envelope: &QueueEnvelope, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(envelope)?);
    }

    if envelope.tasks.is_empty() {
        return Ok("No tasks in queue.".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Task ID").fg(Color::Cyan),
        Cell::new("Task File").fg(Color::Cyan),
        Cell::new("Next Run Time").fg(Color::Cyan),
        Cell::new("Trigger").fg(Color::Cyan),
    ]);

    for task in &envelope.tasks {
        table.add_row(Row::from(vec![
            task.task_id.as_str(),
            task.task_file.as_str(),
            task.next_run_display(),
            task.trigger.as_str(),
        ]));
    }

    Ok(table.to_string())
}

/// Format one task's details as a field list (human) or JSON.
pub fn format_task(envelope: &TaskEnvelope, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(envelope)?);
    }

    let task = &envelope.task;
    let args = if task.args.is_empty() {
        "-".to_string()
    } else {
        task.args.join(", ")
    };

    let lines = vec![
        format!("Task ID:        {}", task.task_id),
        format!("Task file:      {}", task.task_file),
        format!("Next run time:  {}", task.next_run_display()),
        format!("Trigger:        {}", task.trigger),
        format!("Args:           {}", args),
        format!(
            "Kwargs:         prefix={:?} suffix={:?}",
            task.kwargs.prefix, task.kwargs.suffix
        ),
    ];

    Ok(lines.join("\n"))
}

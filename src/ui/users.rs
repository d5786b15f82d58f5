//! Users table.
//!
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::app::AppState;

pub const COLUMNS: [&str; 6] = ["Name", "Username", "Email", "Phone", "City", "Company"];
pub const EMPTY_PLACEHOLDER: &str = "No users found";

/// Render the window of `visible_users` that contains the selected row.
pub fn render_users_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 {
        app.rows_per_page = body_height;
    }

    let users = app.view().visible_users();
    let rpp = app.rows_per_page.max(1);
    let start = (app.selected / rpp) * rpp;
    let end = (start + rpp).min(users.len());

    let rows: Vec<Row> = if users.is_empty() {
        vec![Row::new(vec![Cell::from(EMPTY_PLACEHOLDER)]).style(Style::default().fg(app.theme.muted))]
    } else {
        users
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .map(|(i, u)| {
                let style = if start + i == app.selected {
                    Style::default()
                        .fg(app.theme.highlight_fg)
                        .bg(app.theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.text)
                };
                Row::new(u.cells().map(|c| Cell::from(c.to_string()))).style(style)
            })
            .collect()
    };

    let widths = [
        Constraint::Min(16),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(3),
    ];
    let header = Row::new(COLUMNS).style(
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    );

    let total = app.view().all_users().len();
    let title = format!("Users ({}/{})", users.len(), total);
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

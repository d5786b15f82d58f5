pub mod components;
pub mod users;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;

pub const TITLE: &str = "User Management Dashboard";

pub fn render(f: &mut Frame, app: &mut AppState) {
    let error_height = if app.view().error_message().is_some() { 1 } else { 0 };
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(TITLE)
        .style(
            Style::default()
                .fg(app.theme.header_fg)
                .bg(app.theme.header_bg)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(title, root[0]);

    components::render_search_box(f, root[1], app);
    components::render_buttons(f, root[2], app);
    components::render_error_banner(f, root[3], app);
    users::render_users_table(f, root[4], app);
    components::render_status_bar(f, root[5], app);
}

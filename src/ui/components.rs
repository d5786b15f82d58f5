//! Shared UI components: search box, control buttons, error banner, status bar.
//!
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::keymap::KeyAction;
use crate::app::{AppState, InputMode};

pub const SEARCH_PLACEHOLDER: &str = "Search by name...";
pub const CLEAR_LABEL: &str = "Clear Search";

/// Render the search input. Shows the placeholder while the term is empty.
pub fn render_search_box(f: &mut Frame, area: Rect, app: &AppState) {
    let editing = app.input_mode == InputMode::Search;
    let term = app.view().search_term();
    let content = if term.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(app.theme.muted))
    } else {
        Span::styled(term.to_string(), Style::default().fg(app.theme.text))
    };
    let border = if editing { app.theme.highlight_fg } else { app.theme.border };
    let p = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(p, area);

    if editing {
        let len = u16::try_from(term.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(len);
        f.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// Render the fetch and clear buttons. A disabled button is drawn muted.
pub fn render_buttons(f: &mut Frame, area: Rect, app: &AppState) {
    let view = app.view();
    let fetch = button(app, view.fetch_label(), KeyAction::Fetch, view.can_fetch());
    let clear = button(app, CLEAR_LABEL, KeyAction::ClearSearch, view.can_clear());
    let mut spans = fetch;
    spans.push(Span::raw("  "));
    spans.extend(clear);
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn button(app: &AppState, label: &str, action: KeyAction, enabled: bool) -> Vec<Span<'static>> {
    let style = if enabled {
        Style::default().fg(app.theme.button_fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.muted).add_modifier(Modifier::DIM)
    };
    let mut spans = vec![Span::styled(format!("[ {label} ]"), style)];
    if let Some(key) = app.keymap.key_for(action) {
        spans.push(Span::styled(format!(" ({key})"), Style::default().fg(app.theme.muted)));
    }
    spans
}

/// Render the error banner. Callers only allot space when there is an error.
pub fn render_error_banner(f: &mut Frame, area: Rect, app: &AppState) {
    if let Some(msg) = app.view().error_message() {
        let p = Paragraph::new(msg.to_string())
            .style(Style::default().fg(app.theme.error))
            .wrap(Wrap { trim: true });
        f.render_widget(p, area);
    }
}

/// Render the bottom status bar with mode, counts and key hints.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let view = app.view();
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
    };
    let hints = match app.input_mode {
        InputMode::Search => "type to filter; Backspace: delete; Enter/Esc: done".to_string(),
        InputMode::Normal => {
            let k = |a| app.keymap.key_for(a).unwrap_or_else(|| "-".to_string());
            format!(
                "{}: search  {}: fetch  {}: clear  {}/{}: move  {}: quit",
                k(KeyAction::StartSearch),
                k(KeyAction::Fetch),
                k(KeyAction::ClearSearch),
                k(KeyAction::MoveDown),
                k(KeyAction::MoveUp),
                k(KeyAction::Quit),
            )
        }
    };
    let msg = format!(
        "mode: {mode}  users: {}/{}  {}  {hints}",
        view.visible_users().len(),
        view.all_users().len(),
        if view.is_loading() { "loading" } else { "idle" },
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

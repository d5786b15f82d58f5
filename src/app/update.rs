use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::runtime::Handle;
use tracing::info;

use crate::app::fetch::spawn_fetch;
use crate::app::state::Action;
use crate::app::{AppState, Command};
use crate::client::UserClient;
use crate::ui;

const TICK: Duration = Duration::from_millis(100);

/// Options the event loop needs beyond the app state itself.
pub struct RunOptions {
    pub client: Arc<dyn UserClient>,
    pub runtime: Handle,
    pub fetch_on_start: bool,
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState, opts: RunOptions) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    if opts.fetch_on_start {
        app.dispatch(Action::FetchStarted);
        spawn_fetch(&opts.runtime, Arc::clone(&opts.client), tx.clone());
    }

    loop {
        drain_outcomes(app, &rx);

        if app.take_dirty() {
            terminal.draw(|f| ui::render(f, app)).context("draw frame")?;
        }

        if !event::poll(TICK).context("poll terminal events")? {
            continue;
        }
        match event::read().context("read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.handle_key(&key) {
                Command::Quit => break,
                Command::Fetch => spawn_fetch(&opts.runtime, Arc::clone(&opts.client), tx.clone()),
                Command::None => {}
            },
            Event::Resize(..) => app.mark_dirty(),
            _ => {}
        }
    }

    info!("exiting");
    Ok(())
}

/// Apply every fetch outcome that settled since the last tick, in settle order.
pub fn drain_outcomes(app: &mut AppState, rx: &Receiver<Action>) {
    while let Ok(action) = rx.try_recv() {
        app.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::model::User;

    fn user(id: u64, name: &str) -> User {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).expect("user")
    }

    #[test]
    fn outcomes_apply_in_settle_order() {
        let mut app = AppState::default();
        app.dispatch(Action::FetchStarted);
        let (tx, rx) = mpsc::channel();
        tx.send(Action::FetchSucceeded(vec![user(1, "Old")])).expect("send");
        tx.send(Action::FetchFailed(FetchError::Status(500))).expect("send");
        tx.send(Action::FetchSucceeded(vec![user(2, "New")])).expect("send");

        drain_outcomes(&mut app, &rx);

        let view = app.view();
        assert_eq!(view.all_users(), &[user(2, "New")]);
        assert_eq!(view.error_message(), None);
        assert!(!view.is_loading());
    }
}

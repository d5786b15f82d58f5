//! View state and the transitions that produce it.
//!
//! `ViewState` is an immutable snapshot. Each transition consumes the current
//! snapshot and returns the next one; nothing else mutates it. [`Store`]
//! holds the latest snapshot and notifies subscribers after every action.

use tracing::debug;

use crate::error::FetchError;
use crate::model::User;
use crate::search::filter_by_name;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    all_users: Vec<User>,
    visible_users: Vec<User>,
    search_term: String,
    error_message: Option<String>,
    is_loading: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_users(&self) -> &[User] {
        &self.all_users
    }

    pub fn visible_users(&self) -> &[User] {
        &self.visible_users
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The fetch control is disabled while a request is in flight.
    pub fn can_fetch(&self) -> bool {
        !self.is_loading
    }

    /// The clear control is disabled whenever the table is empty.
    pub fn can_clear(&self) -> bool {
        !self.visible_users.is_empty()
    }

    pub fn fetch_label(&self) -> &'static str {
        if self.is_loading { "Loading..." } else { "Fetch Users" }
    }

    pub fn fetch_started(self) -> Self {
        Self {
            is_loading: true,
            error_message: None,
            ..self
        }
    }

    /// Show the full result, whatever the current search term.
    pub fn fetch_succeeded(self, users: Vec<User>) -> Self {
        Self {
            visible_users: users.clone(),
            all_users: users,
            error_message: None,
            is_loading: false,
            ..self
        }
    }

    /// Keep the last good list on screen and raise the banner.
    pub fn fetch_failed(self, err: &FetchError) -> Self {
        Self {
            error_message: Some(err.user_message().to_string()),
            is_loading: false,
            ..self
        }
    }

    pub fn search_updated(self, input: &str) -> Self {
        let search_term = input.to_lowercase();
        let visible_users = filter_by_name(&self.all_users, &search_term);
        Self {
            search_term,
            visible_users,
            ..self
        }
    }

    /// Blanks the table rather than restoring `all_users`.
    pub fn search_cleared(self) -> Self {
        Self {
            search_term: String::new(),
            visible_users: Vec::new(),
            ..self
        }
    }
}

/// Every event that can change the view state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    FetchStarted,
    FetchSucceeded(Vec<User>),
    FetchFailed(FetchError),
    SearchUpdated(String),
    SearchCleared,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchStarted => "fetch-start",
            Self::FetchSucceeded(_) => "fetch-success",
            Self::FetchFailed(_) => "fetch-failure",
            Self::SearchUpdated(_) => "search-update",
            Self::SearchCleared => "clear",
        }
    }
}

pub fn reduce(state: ViewState, action: Action) -> ViewState {
    match action {
        Action::FetchStarted => state.fetch_started(),
        Action::FetchSucceeded(users) => state.fetch_succeeded(users),
        Action::FetchFailed(err) => state.fetch_failed(&err),
        Action::SearchUpdated(input) => state.search_updated(&input),
        Action::SearchCleared => state.search_cleared(),
    }
}

type Subscriber = Box<dyn FnMut(&ViewState)>;

/// Holds the current snapshot and fans out change notifications.
#[derive(Default)]
pub struct Store {
    state: ViewState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Register a callback run with the new snapshot after every dispatch.
    pub fn subscribe(&mut self, f: impl FnMut(&ViewState) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.name(), "dispatch");
        let prev = std::mem::take(&mut self.state);
        self.state = reduce(prev, action);
        for notify in &mut self.subscribers {
            notify(&self.state);
        }
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Subscriber that traces every new snapshot.
pub fn log_snapshot(state: &ViewState) {
    debug!(
        total = state.all_users.len(),
        visible = state.visible_users.len(),
        loading = state.is_loading,
        error = state.error_message.is_some(),
        "view state updated"
    );
}

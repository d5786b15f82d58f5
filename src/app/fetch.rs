//! Runs fetches off the UI thread and hands their outcome back as an [`Action`].

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tracing::{info, warn};

use super::state::Action;
use crate::client::UserClient;

/// Await one fetch and turn its result into the matching completion action.
pub async fn fetch_action(client: &dyn UserClient) -> Action {
    match client.get_users().await {
        Ok(users) => {
            info!(count = users.len(), "fetched users");
            Action::FetchSucceeded(users)
        }
        Err(err) => {
            warn!(error = %err, "fetching users failed");
            Action::FetchFailed(err)
        }
    }
}

/// Spawn a fetch on `rt`. The outcome is sent on `tx` once it settles.
///
/// Fetches are not de-duplicated: if several are in flight, outcomes arrive
/// in settle order.
pub fn spawn_fetch(rt: &Handle, client: Arc<dyn UserClient>, tx: Sender<Action>) {
    info!("fetch started");
    rt.spawn(async move {
        let action = fetch_action(client.as_ref()).await;
        // Receiver only goes away when the UI loop has exited.
        let _ = tx.send(action);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::model::User;
    use async_trait::async_trait;
    use std::sync::mpsc;
    use std::time::Duration;

    struct Canned(Result<Vec<User>, FetchError>);

    #[async_trait]
    impl UserClient for Canned {
        async fn get_users(&self) -> Result<Vec<User>, FetchError> {
            self.0.clone()
        }
    }

    fn leanne() -> User {
        serde_json::from_str(r#"{"id": 1, "name": "Leanne Graham"}"#).expect("user")
    }

    #[tokio::test]
    async fn success_maps_to_fetch_succeeded() {
        let action = fetch_action(&Canned(Ok(vec![leanne()]))).await;
        assert_eq!(action, Action::FetchSucceeded(vec![leanne()]));
    }

    #[tokio::test]
    async fn failure_maps_to_fetch_failed() {
        let action = fetch_action(&Canned(Err(FetchError::Status(502)))).await;
        assert_eq!(action, Action::FetchFailed(FetchError::Status(502)));
    }

    #[test]
    fn spawned_fetch_reports_back_over_the_channel() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("runtime");
        let (tx, rx) = mpsc::channel();
        spawn_fetch(rt.handle(), Arc::new(Canned(Ok(vec![leanne()]))), tx);
        let action = rx.recv_timeout(Duration::from_secs(5)).expect("outcome");
        assert_eq!(action.name(), "fetch-success");
    }
}

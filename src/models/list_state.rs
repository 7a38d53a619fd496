use crate::api::ApiError;

use super::member::Member;

/// Lifecycle of the directory fetch that backs the dashboard. The view
/// renders whatever state the fetch ended in; a failed fetch is shown as
/// a failure, never as an empty directory.
#[derive(Debug, Clone, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<Member>),
    Failed(String),
}

impl ListState {
    /// Idle -> Loading. Resets a previous outcome.
    pub fn begin(&mut self) {
        *self = ListState::Loading;
    }

    /// Loading -> Ready/Failed, from the fetch result.
    pub fn finish(&mut self, result: Result<Vec<Member>, ApiError>) {
        *self = match result {
            Ok(members) => ListState::Ready(members),
            Err(e) => ListState::Failed(e.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    /// The fetched directory; empty unless Ready.
    pub fn members(&self) -> &[Member] {
        match self {
            ListState::Ready(members) => members,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Status};

    fn members() -> Vec<Member> {
        vec![Member {
            id: "1".into(),
            name: "Alex Rivera".into(),
            email: "alex.rivera@example.com".into(),
            role: Role::Admin,
            status: Status::Active,
            avatar_url: None,
        }]
    }

    #[test]
    fn walks_idle_loading_ready() {
        let mut state = ListState::default();
        assert!(state.members().is_empty());
        state.begin();
        assert!(state.is_loading());
        state.finish(Ok(members()));
        assert_eq!(state.members().len(), 1);
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_carries_the_error_text() {
        let mut state = ListState::default();
        state.begin();
        state.finish(Err(ApiError::Status {
            code: 503,
            detail: "maintenance".into(),
        }));
        assert!(state.members().is_empty());
        assert!(state.error().unwrap().contains("503"));
    }
}

pub mod app_state;
pub mod edit_session;
pub mod list_state;
pub mod member;

// Re-export commonly used types
pub use app_state::AppState;
pub use edit_session::{CardFields, EditSession};
pub use list_state::ListState;
pub use member::{
    Member, NewMember, NewMemberDraft, Role, Status, DEFAULT_AVATAR_URL, MISSING_FIELDS_NOTICE,
};

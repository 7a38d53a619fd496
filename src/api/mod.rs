// Atomic API modules
pub mod client;
pub mod error;
pub mod members;

// Re-export commonly used items
pub use client::{set_silent, ApiClient, ApiResponse};
pub use error::ApiError;
pub use members::{create_member, list_members, remove_member, update_member};

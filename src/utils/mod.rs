// URL handling utilities
pub mod query_string;
pub mod url_parser;

// Re-export for convenient access
pub use query_string::build_query_string;
pub use url_parser::hostname_from_url;

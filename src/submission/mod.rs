mod client;
pub mod http_client;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export the request builder and submission entry point
pub use client::{RuntimeParams, build_form, submit_tournament};

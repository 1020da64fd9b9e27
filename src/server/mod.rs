//! HTTP serving
//!
//! - [`router`] - URL to page route
//! - [`dispatch`] - per-request store scope and page rendering
//! - [`tiny_http`](self::tiny_http) - the blocking accept loop

pub mod dispatch;
pub mod router;
pub mod tiny_http;

pub use dispatch::{App, HttpResponse};
pub use router::Route;

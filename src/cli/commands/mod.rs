//! Command implementations

mod config;
mod serve;

pub use config::show_config;
pub use serve::{ServeOverrides, serve};

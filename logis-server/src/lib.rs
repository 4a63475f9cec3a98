//! HTTP and terminal front ends of the housing question-answering service.
//!
//! Startup is a one-shot sequence (fetch housing data, embed, index) that
//! produces an [`AppContext`]; serving only starts once it succeeded.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod startup;
pub mod state;
pub mod terminal;

pub use app::{router, serve, AppBuilder};
pub use config::{AppConfig, Cli, Mode};
pub use error::{ConfigError, StartupError};
pub use startup::{build_context, initialize, load_documents};
pub use state::AppContext;

//! Terminal front end for the gridmark engine.
//!
//! The engine is the single source of truth; this crate only parses
//! intents, dispatches them, and prints whatever the engine reports.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod render;
pub mod replay;
pub mod session;

pub use cli::{BoardArgs, Cli, Command};
pub use config::{DisplaySettings, GridmarkConfig};
pub use replay::{ReplayReport, replay};
pub use session::{Feedback, Intent, ParseIntentError, Session};

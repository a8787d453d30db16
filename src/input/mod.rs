//! Input adapters for the explorer.
//!
//! Adapters receive events from a source and translate them into
//! [`ExplorerCommand`](crate::core::explorer::command::ExplorerCommand)s.

pub mod cli_args;
pub mod dispatcher;
#[cfg(feature = "gui")]
pub mod gui;

//! projboard - a terminal project board
//!
//! Projects are submitted through a form, kept in an in-memory store and
//! shown in two lists (active and finished) that re-render whenever the
//! store changes.

pub mod board;
pub mod config;
pub mod entry;
pub mod error;
pub mod form;
pub mod id;
pub mod report;
pub mod store;
pub mod template;
pub mod tui;
pub mod validator;
pub mod view;

pub use board::Board;
pub use error::{BoardError, Result};

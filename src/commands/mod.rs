//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — page commands: browse/product/order/summary.
//! - `admin.rs` — catalog maintenance and placeholder collaborators.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate page logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::{handle_catalog_commands, handle_collaborator_commands};
pub use runtime::handle_page_commands;

//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — page views, navigation envelopes, config file shape.
//! - `constants.rs` — page paths, query parameter names, not-found messages.
//!
//! ## Rule of thumb
//! Domain types should be data-only. Encoding, lookup and rendering live in
//! `services/*`; catalog records live in `catalog.rs`.
//!
//! ## Compatibility note
//! Changes in these structs alter `--json` outputs. Keep them in step with
//! `docs/contracts/*`.

pub mod constants;
pub mod models;

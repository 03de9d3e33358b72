//! Service layer: page logic and the helpers around it.
//!
//! ## Service map
//! - `navigation.rs` — query-string envelopes between pages (encode/decode).
//! - `resolver.rs` — query string → catalog records.
//! - `gallery.rs` — thumbnail/preview state machine and its projection.
//! - `selection.rs` — validator radio group and checkout.
//! - `pages.rs` — listing/detail/order/summary page views.
//! - `collaborators.rs` — payment/wallet/validation capability traits + stubs.
//! - `settings.rs` — config file + CLI flag layering, catalog construction.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers; the only side effects here are config/catalog reads.
//! - Keep command handlers thin; delegate to services.

pub mod collaborators;
pub mod gallery;
pub mod navigation;
pub mod output;
pub mod pages;
pub mod resolver;
pub mod selection;
pub mod settings;

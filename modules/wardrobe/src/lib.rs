//! Wardrobe module: users, the clothing items they own and the outfits
//! grouping those items.
//!
//! Layout follows the usual module convention:
//! - `domain` — pure models, business rules and the service façade
//! - `infra` — SQLite schema and per-entity query functions
//! - `api` — REST DTOs, handlers, routes and error mapping

pub mod api;
pub mod domain;
pub mod infra;

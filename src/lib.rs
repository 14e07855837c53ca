//! Game Planner
//!
//! Static game catalogs (items, costs, build times) and build orders
//! assembled from them.
//!
//! - [`models`] - resources and game items
//! - [`catalog`] - a game's item catalog
//! - [`build_order`] - ordered, renumbered steps referencing catalog items
//! - [`summary`] - text rendering and totals
//! - [`script`] - textual plan operations for the CLI
//! - [`samples`] - bundled sample catalogs
//! - [`db`] - SQLite catalog store

pub mod build_order;
pub mod catalog;
pub mod db;
pub mod error;
pub mod models;
pub mod samples;
pub mod script;
pub mod summary;

pub use build_order::{BuildOrder, BuildOrderStep};
pub use catalog::Game;
pub use error::PlannerError;
pub use models::{GameItem, Resource};

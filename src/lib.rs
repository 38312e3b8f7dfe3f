//! # Tandem
//!
//! In-memory state and query layer for two parallel review dashboards: a
//! **rater** tool that records human judgments on pairs of AI-generated
//! responses, and a **broker** tool that compares commercial-insurance carrier
//! quotes and binds policies.
//!
//! Each variant follows the same pattern: a store seeded once from a fixed
//! dataset, pure derived views over it, and a small named mutation API. Page
//! components are consumers of this layer; they receive a context by
//! dependency injection, read owned snapshots, and mutate only through the
//! context traits. Nothing is persisted; state dies with the process.
//!
//! ## Modules
//!
//! - `rater` - comparison-task store, rating workflow, and dashboard statistics
//! - `broker` - submission store, quote comparison views, and the bind workflow
//! - `error` - crate-wide error type
//! - `testing` - builders for rater and broker fixtures used across tests
pub mod broker;
pub mod error;
pub mod rater;

pub mod testing;

pub use error::{Error, Result};

//! # Intel Core
//!
//! Decides whether a freshly observed situation for a commander is worth
//! passing on to the reporting and alerting collaborators, and keeps the
//! bounded memory those decisions are made against.
//!
//! ## Core Components
//!
//! - **situation**: Immutable situation snapshots and how they are parsed
//! - **cache**: Bounded recency cache with size and age eviction
//! - **novelty**: Novelty rules, gates and the per-kind gate bundle
//! - **dispatch**: The gate -> collaborator -> record sequence
//!
//! Nothing here does I/O: collaborators are traits, and time comes from a [`Clock`].

pub mod cache;
pub mod clock;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod novelty;
pub mod situation;

pub use cache::*;
pub use clock::*;
pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use novelty::*;
pub use situation::*;

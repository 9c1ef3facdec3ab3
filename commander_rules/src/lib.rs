//! # Commander Rules
//!
//! The rules crate for Sitrep: commander identity and session lifecycle,
//! group affiliations (wing, crew, squadron, power pledge) and the small value
//! objects they are built from. This crate owns no reporting policy; it only
//! answers "what is the current state of this commander".

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod roster;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use roster::*;

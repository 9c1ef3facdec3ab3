//! Novelty gating: deciding whether an observation repeats what was already
//! passed on, against a bounded memory of what was.

pub mod gate;
pub mod gates;
pub mod rules;

pub use gate::*;
pub use gates::*;
pub use rules::*;

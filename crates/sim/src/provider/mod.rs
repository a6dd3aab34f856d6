//! Sequence providers: hard-coded reference elements and synthetic
//! generators used as sample input for the engine.

pub mod random;
pub mod reference;

pub use random::{random_coding_sequence, random_sequence, STOP_CODONS};
pub use reference::{regulatory_cassette, RegulatoryElement};

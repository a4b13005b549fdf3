//! Test utilities for the simplevec crates.
//!
//! - [`tracked`]: an element type that counts live instances, for checking that
//!   containers drop every element exactly once.
//! - [`data_gen`]: seeded generators of element values and mutation sequences.

pub mod data_gen;
pub mod tracked;

//! vitalis-core
//!
//! Pure domain types for the Vitalis risk engine: the raw attribute record a
//! client submits, the normalized risk factors, and the result records.
//! No I/O and no algorithms live here; this is the shared vocabulary.

pub mod error;
pub mod models;

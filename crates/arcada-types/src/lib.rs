//! # arcada-types
//!
//! Shared types, identifiers, and error types for the Arcada
//! dental-arch manifest pipeline.
//!
//! This crate has no pipeline logic: it defines the vocabulary
//! that the other Arcada crates share.

pub mod error;
pub mod tooth;
pub mod vector;

pub use error::{ArcadaError, ArcadaResult};
pub use tooth::{Section, ToothId, ToothNumber};
pub use vector::Vec3;

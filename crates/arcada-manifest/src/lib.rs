//! # arcada-manifest
//!
//! Batch pipeline that builds the dental-arch manifest: classifies
//! fragment files, extracts legacy tooth positions, aggregates assembly
//! geometry into centroids, resolves numeric-named fragments to the
//! nearest tooth, and writes the manifest artifact.
//!
//! ## Key Types
//!
//! - [`DatasetLayout`] — the four paths naming one dataset.
//! - [`Manifest`] — the serialized output: tooth mapping plus diagnostics.
//! - [`builder::build_and_write`] — the whole pipeline, end to end.

pub mod assembly;
pub mod builder;
pub mod classify;
pub mod layout;
pub mod legacy;
pub mod manifest;
pub mod patterns;
pub mod resolve;

mod read;

pub use layout::DatasetLayout;
pub use manifest::Manifest;

//! Toroidal hex-grid geometry for hexmap worlds.
//!
//! The map is a grid of `width * height` nodes in row-major order where odd
//! rows are shifted half a node east. Both axes wrap, so the map is a torus.
//! [`HexTorus`] answers every geometric question the world model asks:
//! neighbours, second-ring neighbours, wrap-aware distances and point
//! folding. [`RadiusScan`] is the lazy ring walk that radius queries are
//! built on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod radius;
pub mod torus;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::{Border, CrossBorders};
pub use error::SpaceError;
pub use radius::RadiusScan;
pub use torus::HexTorus;

//! Lazy brush - two-point kinematic smoothing for pointer input
//!
//! This crate damps raw pointer input before it is turned into a stroke:
//! - [`point::Point`] - 2-D coordinate with the vector helpers the brush needs
//! - [`brush::LazyBrush`] - pointer/brush pair with a catch radius
//! - [`validation`] - Checked construction from untrusted options
//! - [`stroke`] - Press/move/release capture producing smoothed paths
//!
//! Nothing here performs I/O or owns rendering resources. The host feeds
//! pointer samples into [`LazyBrush::update`] and reads the brush back.

pub mod brush;
pub mod constants;
pub mod point;
pub mod stroke;
pub mod validation;

pub use brush::*;
pub use constants::*;
pub use point::*;
pub use stroke::*;
pub use validation::*;

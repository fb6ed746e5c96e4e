//! Content plans and the per-post batch driver.

/// Background raster producers.
pub mod background;
/// Per-post slide rendering.
pub mod builder;
/// Content strategy records.
pub mod model;

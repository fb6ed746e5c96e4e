//! Rasterization: surfaces, compositing and the two slide renderers.

/// Badge, headline and footer slide.
pub mod branded;
/// Porter-Duff compositing of premultiplied pixels.
pub mod composite;
/// Title and body over a background raster.
pub mod overlay;
/// Owned pixel surfaces.
pub mod surface;

//! File-backed inputs: fonts and background rasters.

/// Raster decoding and writing.
pub mod decode;
/// Font lookup and loading.
pub mod fonts;

//! Text layout: wrap-width estimation, word wrapping, exact measurement and vertical stacking.

/// Anchor points for single text lines.
pub mod anchor;
/// Line measurement and shaping.
pub mod measure;
/// Vertical stacking of wrapped blocks.
pub mod stack;
/// Wrap-width estimation and greedy word wrapping.
pub mod wrap;

#[cfg(test)]
pub(crate) mod testing;

//! Text-to-image compositing for social media carousels.
//!
//! A post is a branded headline slide followed by image slides, each a background raster with a
//! title and body drawn over a translucent backing rectangle. Text of any length is wrapped to
//! the canvas, measured exactly and stacked vertically.
//!
//! - [`BrandedSlideRenderer`] draws the text-only first slide
//! - [`OverlayCompositor`] draws a title and body over a background
//! - [`CarouselBuilder`] renders a whole [`ContentStrategy`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Fonts and background rasters.
pub mod assets;
/// Content records and the batch driver.
pub mod carousel;
mod foundation;
/// Measurement, wrapping and stacking.
pub mod layout;
/// Surfaces and slide renderers.
pub mod render;

pub use crate::foundation::config::{
    BOLD_FONT, BadgeStyle, BrandedStyle, CompositorConfig, DISPLAY_FONT, OverlayStyle,
    REGULAR_FONT, StyleSpec, default_fonts_dir,
};
pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8, Size, Vec2};
pub use crate::foundation::error::{CarouselError, CarouselResult, ErrorKind};

pub use crate::assets::fonts::{FontDir, FontHandle};
pub use crate::carousel::background::{
    BackgroundRequest, BackgroundSource, DirectoryBackgrounds, SolidBackground,
};
pub use crate::carousel::builder::{
    CarouselBuilder, PostReport, SlideFailure, caption_path, create_output_folder, slide_path,
    temp_background_path,
};
pub use crate::carousel::model::{ContentStrategy, SymbolicSlide};
pub use crate::layout::anchor::Anchor;
pub use crate::layout::measure::{FontMeasure, LineExtent, TextMeasure};
pub use crate::layout::stack::{LayoutResult, PlacedLine, TextBlock, stack_blocks};
pub use crate::render::branded::{BrandedLayout, BrandedSlideRenderer};
pub use crate::render::overlay::{OverlayCompositor, OverlayLayout};
pub use crate::render::surface::{DrawOp, Surface};

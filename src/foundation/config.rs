//! Renderer configuration.
//!
//! All styles are plain data, constructed once and passed into the renderers. Defaults reproduce
//! the branded look of the carousel; any field may be overridden from a JSON file.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{CarouselError, CarouselResult};

/// Candidate file name of the bold sans font (badge, footer, slide titles).
pub const BOLD_FONT: &str = "Inter-Bold.ttf";
/// Candidate file name of the regular sans font (slide body text).
pub const REGULAR_FONT: &str = "Inter-Regular.ttf";
/// Candidate file name of the display serif font (headlines).
pub const DISPLAY_FONT: &str = "PlayfairDisplay-ExtraBold.ttf";

/// The `fonts/` directory shipped next to this crate's manifest.
///
/// Resolved at compile time so lookups never depend on the process working directory.
pub fn default_fonts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fonts")
}

/// Font, size, color and wrapping policy for one text role.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    /// Font file names tried in order inside the fonts directory.
    pub font_candidates: Vec<String>,
    /// Point size in pixels.
    pub size_px: f32,
    /// Fill color.
    pub color: Rgba8,
    /// Inter-line spacing as a fraction of `size_px`.
    pub line_spacing_frac: f64,
    /// Glyph whose advance estimates the average character width.
    pub reference_glyph: String,
    /// Characters per line used when the reference glyph has no usable width.
    pub fallback_wrap_chars: usize,
}

impl StyleSpec {
    fn new(font: &str, size_px: f32, color: Rgba8) -> Self {
        Self {
            font_candidates: vec![font.to_string()],
            size_px,
            color,
            line_spacing_frac: 0.2,
            reference_glyph: "a".to_string(),
            fallback_wrap_chars: 50,
        }
    }

    fn reference(mut self, glyph: &str, fallback_wrap_chars: usize) -> Self {
        self.reference_glyph = glyph.to_string();
        self.fallback_wrap_chars = fallback_wrap_chars;
        self
    }

    fn spacing(mut self, frac: f64) -> Self {
        self.line_spacing_frac = frac;
        self
    }

    /// Inter-line spacing in whole pixels.
    pub fn line_spacing_px(&self) -> f64 {
        (f64::from(self.size_px) * self.line_spacing_frac).floor()
    }

    fn validate(&self, role: &str) -> CarouselResult<()> {
        if self.font_candidates.is_empty() {
            return Err(CarouselError::validation(format!(
                "{role}: font_candidates must be non-empty"
            )));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(CarouselError::validation(format!(
                "{role}: size_px must be finite and > 0"
            )));
        }
        if !self.line_spacing_frac.is_finite() || self.line_spacing_frac < 0.0 {
            return Err(CarouselError::validation(format!(
                "{role}: line_spacing_frac must be finite and >= 0"
            )));
        }
        if self.reference_glyph.is_empty() {
            return Err(CarouselError::validation(format!(
                "{role}: reference_glyph must be non-empty"
            )));
        }
        if self.fallback_wrap_chars == 0 {
            return Err(CarouselError::validation(format!(
                "{role}: fallback_wrap_chars must be > 0"
            )));
        }
        Ok(())
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self::new(REGULAR_FONT, 45.0, Rgba8::WHITE)
    }
}

/// Colored label badge in the top-left corner of the branded slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BadgeStyle {
    /// Label text, centered in the badge.
    pub label: String,
    /// Badge width in pixels.
    pub width_px: f64,
    /// Badge height in pixels.
    pub height_px: f64,
    /// Badge fill.
    pub fill: Rgba8,
    /// Label text style.
    pub text: StyleSpec,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            label: "LATEST NEWS".to_string(),
            width_px: 180.0,
            height_px: 40.0,
            fill: Rgba8::rgb(0xD9, 0x2D, 0x20),
            text: StyleSpec::new(BOLD_FONT, 24.0, Rgba8::WHITE),
        }
    }
}

/// Layout and styling of the text-only branded headline slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BrandedStyle {
    /// Solid background color.
    pub background: Rgba8,
    /// Margin as a fraction of the canvas width.
    pub margin_frac: f64,
    /// Top-left badge.
    pub badge: BadgeStyle,
    /// Headline text style.
    pub headline: StyleSpec,
    /// Footer label, anchored to the bottom-right corner.
    pub footer_label: String,
    /// Footer text style.
    pub footer: StyleSpec,
}

impl Default for BrandedStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0xF8, 0xF9, 0xFA),
            margin_frac: 0.1,
            badge: BadgeStyle::default(),
            headline: StyleSpec::new(DISPLAY_FONT, 80.0, Rgba8::BLACK)
                .reference("A", 20)
                .spacing(0.05),
            footer_label: "Finance & Politics Brief".to_string(),
            footer: StyleSpec::new(BOLD_FONT, 20.0, Rgba8::rgb(0x6C, 0x75, 0x7D)),
        }
    }
}

/// Layout and styling of the title/body overlay drawn on a background image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Margin as a fraction of the background width.
    pub margin_frac: f64,
    /// Title text style.
    pub title: StyleSpec,
    /// Body text style.
    pub body: StyleSpec,
    /// Vertical gap between the title block and the body block.
    pub block_gap_px: f64,
    /// Padding between the text and the edges of the backing rectangle.
    pub padding_px: f64,
    /// Backing rectangle fill.
    pub backing: Rgba8,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            margin_frac: 0.08,
            title: StyleSpec::new(BOLD_FONT, 80.0, Rgba8::WHITE).reference("a", 30),
            body: StyleSpec::new(REGULAR_FONT, 45.0, Rgba8::WHITE).reference("a", 50),
            block_gap_px: 60.0,
            padding_px: 30.0,
            backing: Rgba8::rgba(0, 0, 0, 153),
        }
    }
}

/// Complete compositor configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Directory searched for font files.
    pub fonts_dir: PathBuf,
    /// Canvas of the branded slide.
    pub canvas: Canvas,
    /// Branded slide style.
    pub branded: BrandedStyle,
    /// Overlay style.
    pub overlay: OverlayStyle,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            fonts_dir: default_fonts_dir(),
            canvas: Canvas::default(),
            branded: BrandedStyle::default(),
            overlay: OverlayStyle::default(),
        }
    }
}

impl CompositorConfig {
    /// Parse configuration JSON. Missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> CarouselResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| CarouselError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: &Path) -> CarouselResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Reject configurations the renderers cannot honor.
    pub fn validate(&self) -> CarouselResult<()> {
        self.canvas.validate()?;
        validate_margin("branded.margin_frac", self.branded.margin_frac)?;
        validate_margin("overlay.margin_frac", self.overlay.margin_frac)?;
        self.branded.badge.text.validate("branded.badge.text")?;
        self.branded.headline.validate("branded.headline")?;
        self.branded.footer.validate("branded.footer")?;
        self.overlay.title.validate("overlay.title")?;
        self.overlay.body.validate("overlay.body")?;
        for (name, v) in [
            ("branded.badge.width_px", self.branded.badge.width_px),
            ("branded.badge.height_px", self.branded.badge.height_px),
            ("overlay.block_gap_px", self.overlay.block_gap_px),
            ("overlay.padding_px", self.overlay.padding_px),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(CarouselError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

fn validate_margin(name: &str, frac: f64) -> CarouselResult<()> {
    if !frac.is_finite() || !(0.0..0.5).contains(&frac) {
        return Err(CarouselError::validation(format!(
            "{name} must be in [0, 0.5)"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;

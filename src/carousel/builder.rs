use std::path::{Path, PathBuf};

use crate::carousel::background::{BackgroundRequest, BackgroundSource};
use crate::carousel::model::{ContentStrategy, SymbolicSlide};
use crate::foundation::config::CompositorConfig;
use crate::foundation::error::{CarouselError, CarouselResult, ErrorKind};
use crate::render::branded::BrandedSlideRenderer;
use crate::render::overlay::OverlayCompositor;

/// Slide number of the branded headline slide.
pub const HEADLINE_SLIDE: usize = 1;

/// A slide that was skipped.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SlideFailure {
    /// Slide number as used in the output file name.
    pub index: usize,
    /// Category of the underlying error.
    pub kind: ErrorKind,
    /// Human readable diagnostic.
    pub message: String,
}

/// Outcome of [`CarouselBuilder::render_post`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PostReport {
    /// Post number used in file names.
    pub post_number: usize,
    /// Slides written, in slide order.
    pub slides: Vec<PathBuf>,
    /// Slides skipped, in slide order.
    pub failures: Vec<SlideFailure>,
    /// Caption file, when it could be written.
    pub caption: Option<PathBuf>,
    /// Why the caption file could not be written.
    pub caption_error: Option<String>,
}

impl PostReport {
    fn record(&mut self, index: usize, err: &CarouselError) {
        tracing::warn!(slide = index, kind = %err.kind(), error = %err, "slide skipped");
        self.failures.push(SlideFailure {
            index,
            kind: err.kind(),
            message: err.to_string(),
        });
    }

    /// `true` when every slide and the caption were written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.caption_error.is_none()
    }
}

/// Output path of slide `index` of post `post_number`.
pub fn slide_path(out_dir: &Path, post_number: usize, index: usize) -> PathBuf {
    out_dir.join(format!("post_{post_number:02}_slide_{index:02}.png"))
}

/// Output path of the caption file of post `post_number`.
pub fn caption_path(out_dir: &Path, post_number: usize) -> PathBuf {
    out_dir.join(format!("post_{post_number:02}_caption.txt"))
}

/// Temporary background of slide `index` of post `post_number`; removed once the slide is done.
pub fn temp_background_path(out_dir: &Path, post_number: usize, index: usize) -> PathBuf {
    out_dir.join(format!("temp_bg_{post_number:02}_{index}.png"))
}

/// Create `root/output_<stamp>` and return its path.
pub fn create_output_folder(root: &Path, stamp: &str) -> CarouselResult<PathBuf> {
    if stamp.is_empty() || stamp.contains(['/', '\\']) {
        return Err(CarouselError::validation(format!(
            "output folder stamp '{stamp}' must be a non-empty file name"
        )));
    }
    let dir = root.join(format!("output_{stamp}"));
    std::fs::create_dir_all(&dir)
        .map_err(|e| CarouselError::io(format!("create '{}': {e}", dir.display())))?;
    Ok(dir)
}

/// Temporary file removed when dropped.
struct TempFile(PathBuf);

impl TempFile {
    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.0) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.0.display(), error = %e, "failed to remove temp background");
            }
        }
    }
}

/// Renders every slide of a post plus its caption file.
#[derive(Clone, Debug)]
pub struct CarouselBuilder {
    branded: BrandedSlideRenderer,
    overlay: OverlayCompositor,
}

impl CarouselBuilder {
    /// Construct from the two slide renderers.
    pub fn new(branded: BrandedSlideRenderer, overlay: OverlayCompositor) -> Self {
        Self { branded, overlay }
    }

    /// Construct from a validated [`CompositorConfig`].
    pub fn from_config(cfg: &CompositorConfig) -> CarouselResult<Self> {
        Ok(Self::new(
            BrandedSlideRenderer::from_config(cfg)?,
            OverlayCompositor::from_config(cfg),
        ))
    }

    /// Render post `post_number` of `strategy` into `out_dir`.
    ///
    /// A failing slide is recorded in the report and the remaining slides are still rendered.
    /// Only failing to create `out_dir` is an error.
    #[tracing::instrument(skip(self, strategy, out_dir, backgrounds), fields(out_dir = %out_dir.display()))]
    pub fn render_post(
        &self,
        strategy: &ContentStrategy,
        post_number: usize,
        out_dir: &Path,
        backgrounds: &mut dyn BackgroundSource,
    ) -> CarouselResult<PostReport> {
        std::fs::create_dir_all(out_dir)
            .map_err(|e| CarouselError::io(format!("create '{}': {e}", out_dir.display())))?;

        let mut report = PostReport {
            post_number,
            ..PostReport::default()
        };

        if strategy.headline_slide_text.is_empty() {
            tracing::debug!("no headline, branded slide skipped");
        } else {
            let out = slide_path(out_dir, post_number, HEADLINE_SLIDE);
            match self.branded.try_render(&strategy.headline_slide_text, &out) {
                Ok(_) => report.slides.push(out),
                Err(err) => report.record(HEADLINE_SLIDE, &err),
            }
        }

        for (i, slide) in strategy.symbolic_slides.iter().enumerate() {
            let index = i + 2;
            let out = slide_path(out_dir, post_number, index);
            let temp = temp_background_path(out_dir, post_number, index);
            match self.render_symbolic(slide, i + 1, temp, &out, backgrounds) {
                Ok(()) => report.slides.push(out),
                Err(err) => report.record(index, &err),
            }
        }

        let caption = caption_path(out_dir, post_number);
        match std::fs::write(&caption, strategy.caption_document()) {
            Ok(()) => report.caption = Some(caption),
            Err(e) => {
                tracing::warn!(path = %caption.display(), error = %e, "caption not written");
                report.caption_error = Some(format!("write '{}': {e}", caption.display()));
            }
        }

        tracing::info!(
            slides = report.slides.len(),
            failures = report.failures.len(),
            "post rendered"
        );
        Ok(report)
    }

    fn render_symbolic(
        &self,
        slide: &SymbolicSlide,
        slide_number: usize,
        temp: PathBuf,
        out: &Path,
        backgrounds: &mut dyn BackgroundSource,
    ) -> CarouselResult<()> {
        let temp = TempFile(temp);
        backgrounds.produce(
            BackgroundRequest {
                slide_number,
                prompt: &slide.image_prompt,
            },
            temp.path(),
        )?;
        self.overlay
            .try_render(temp.path(), &slide.slide_title, &slide.slide_text, out)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/builder.rs"]
mod tests;

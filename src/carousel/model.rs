use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{CarouselError, CarouselResult};

/// One image slide of a carousel.
///
/// Missing and `null` fields both read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SymbolicSlide {
    /// Short title drawn in the bold font.
    #[serde(deserialize_with = "null_as_default")]
    pub slide_title: String,
    /// Explanation drawn in the regular font.
    #[serde(deserialize_with = "null_as_default")]
    pub slide_text: String,
    /// Description handed to the background image generator.
    #[serde(deserialize_with = "null_as_default")]
    pub image_prompt: String,
}

impl SymbolicSlide {
    /// `true` when there is neither a title nor text to draw.
    pub fn has_no_text(&self) -> bool {
        self.slide_title.is_empty() && self.slide_text.is_empty()
    }
}

/// Content plan for one carousel post.
///
/// Every field is optional in the JSON; missing and `null` values default to empty. A `null`
/// entry in `symbolic_slides` is an empty slide and a `null` hashtag is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContentStrategy {
    /// Text of the branded first slide.
    #[serde(deserialize_with = "null_as_default")]
    pub headline_slide_text: String,
    /// Image slides, in order.
    #[serde(deserialize_with = "nullable_items")]
    pub symbolic_slides: Vec<SymbolicSlide>,
    /// Caption posted with the carousel.
    #[serde(deserialize_with = "null_as_default")]
    pub post_caption: String,
    /// Hashtags, each including its `#`.
    #[serde(deserialize_with = "non_null_items")]
    pub hashtags: Vec<String>,
}

impl ContentStrategy {
    /// Parse and normalize a strategy record.
    pub fn from_json_str(s: &str) -> CarouselResult<Self> {
        let raw: Self = serde_json::from_str(s).map_err(|e| CarouselError::serde(e.to_string()))?;
        Ok(raw.normalized())
    }

    /// Read, parse and normalize a strategy file.
    pub fn from_path(path: &Path) -> CarouselResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read strategy '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Trim every string and drop blank hashtags.
    pub fn normalized(mut self) -> Self {
        trim_in_place(&mut self.headline_slide_text);
        trim_in_place(&mut self.post_caption);
        for slide in &mut self.symbolic_slides {
            trim_in_place(&mut slide.slide_title);
            trim_in_place(&mut slide.slide_text);
            trim_in_place(&mut slide.image_prompt);
        }
        self.hashtags = self
            .hashtags
            .into_iter()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect();
        self
    }

    /// Indices of symbolic slides with neither title nor text.
    pub fn empty_slides(&self) -> Vec<usize> {
        self.symbolic_slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.has_no_text())
            .map(|(i, _)| i)
            .collect()
    }

    /// Caption file contents: caption section followed by hashtags section.
    pub fn caption_document(&self) -> String {
        let caption = if self.post_caption.is_empty() {
            "No caption generated."
        } else {
            self.post_caption.as_str()
        };
        format!(
            "--- POST CAPTION ---\n\n{caption}\n\n--- HASHTAGS ---\n\n{}",
            self.hashtags.join(" ")
        )
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn nullable_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

fn non_null_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

fn trim_in_place(s: &mut String) {
    let trimmed = s.trim();
    if trimmed.len() != s.len() {
        *s = trimmed.to_string();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/model.rs"]
mod tests;

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::Rect,
    error::{LayoutError, LayoutResult},
};

/// Configuration of the sample toggle screen.
///
/// Every field has a default matching the reference screen, so an empty JSON object is a
/// complete configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    /// Viewport size in points.
    pub viewport: Viewport,
    /// Natural height of the global header view.
    pub header_height: f64,
    /// Emit a header above each non-empty section.
    pub section_headers: bool,
    /// Height answered for section headers; `None` leaves the query unanswered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_header_height: Option<f64>,
    /// Vertical gap after every item.
    pub line_spacing: f64,
    /// Horizontal gap between items (reported, unused by the vertical flow).
    pub interitem_spacing: f64,
    /// Item width is the viewport width minus this inset.
    pub item_inset: f64,
    /// Item height per section ordinal; sections past the end get zero-sized items.
    pub item_heights: Vec<f64>,
    /// Values shown while side A is active.
    pub side_a: Vec<i64>,
    /// Values shown while side B is active.
    pub side_b: Vec<i64>,
}

/// Viewport dimensions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Viewport {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 375.0,
            height: 667.0,
        }
    }
}

impl Viewport {
    /// Viewport bounds scrolled to the top.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            header_height: 60.0,
            section_headers: false,
            section_header_height: None,
            line_spacing: 10.0,
            interitem_spacing: 8.0,
            item_inset: 20.0,
            item_heights: vec![50.0, 70.0, 80.0],
            side_a: (1..=7).collect(),
            side_b: (1..=3).collect(),
        }
    }
}

impl ScreenConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> LayoutResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LayoutError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read screen config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Reject sizes that cannot produce a layout.
    pub fn validate(&self) -> LayoutResult<()> {
        if !(self.viewport.width.is_finite() && self.viewport.width > 0.0) {
            return Err(LayoutError::validation("viewport.width must be > 0"));
        }
        if !(self.viewport.height.is_finite() && self.viewport.height > 0.0) {
            return Err(LayoutError::validation("viewport.height must be > 0"));
        }

        let lengths = [
            ("header_height", self.header_height),
            ("line_spacing", self.line_spacing),
            ("interitem_spacing", self.interitem_spacing),
            ("item_inset", self.item_inset),
        ];
        for (field, value) in lengths {
            ensure_length(field, value)?;
        }
        if self.item_inset > self.viewport.width {
            return Err(LayoutError::validation(format!(
                "item_inset ({}) must not exceed viewport.width ({})",
                self.item_inset, self.viewport.width
            )));
        }
        if let Some(height) = self.section_header_height {
            ensure_length("section_header_height", height)?;
        }
        for (idx, &height) in self.item_heights.iter().enumerate() {
            ensure_length(&format!("item_heights[{idx}]"), height)?;
        }
        Ok(())
    }
}

fn ensure_length(field: &str, value: f64) -> LayoutResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LayoutError::validation(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/screen/config.rs"]
mod tests;

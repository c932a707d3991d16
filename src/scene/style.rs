//! Presentation content of the end-of-game screen, loadable from TOML.
//!
//! ```toml
//! hint = "Press Enter to try again"
//!
//! [lost]
//! headline = "BALL LOST"
//! background = [40, 0, 0, 255]
//! ```
//! Missing keys fall back to the built-in style.

use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use super::error::SceneError;
use super::outcome::Outcome;

/// RGBA, unmultiplied
pub type Rgba = [u8; 4];

pub fn to_color32(rgba: Rgba) -> Color32 { Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]) }

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutcomeStyle {
    pub headline: String,
    pub background: Rgba,
    pub accent: Rgba,
}

impl OutcomeStyle {
    fn won() -> Self {
        Self {
            headline: "YOU WON!".to_string(),
            background: [8, 48, 24, 255],
            accent: [255, 200, 40, 255],
        }
    }

    fn lost() -> Self {
        Self {
            headline: "GAME OVER".to_string(),
            background: [56, 8, 12, 255],
            accent: [230, 50, 50, 255],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScreenStyle {
    pub hint: String,
    pub panel: Rgba,
    pub text: Rgba,
    /// headline font size as fraction of the display height
    pub headline_scale: f32,
    /// hint font size as fraction of the display height
    pub hint_scale: f32,
    // tables last, TOML wants plain keys first
    pub won: OutcomeStyle,
    pub lost: OutcomeStyle,
}

impl Default for ScreenStyle {
    fn default() -> Self {
        Self {
            hint: "Press Enter to play again · Esc to quit".to_string(),
            panel: [20, 20, 24, 230],
            text: [240, 240, 240, 255],
            headline_scale: 0.09,
            hint_scale: 0.035,
            won: OutcomeStyle::won(),
            lost: OutcomeStyle::lost(),
        }
    }
}

impl ScreenStyle {
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = fs::read_to_string(path).map_err(|e| SceneError::Style(format!("{}: {e}", path.display())))?;
        Self::parse(&content).map_err(|e| match e {
            SceneError::Style(msg) => SceneError::Style(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Keys missing in `content` keep their built-in value
    pub fn parse(content: &str) -> Result<Self, SceneError> {
        let patch: StylePatch = toml::from_str(content).map_err(|e| SceneError::Style(e.to_string()))?;
        let mut style = Self::default();
        patch.apply(&mut style);
        style.validate()?;
        Ok(style)
    }

    /// Font scales must be finite and > 0, egui cannot lay out text otherwise
    pub fn validate(&self) -> Result<(), SceneError> {
        for (key, scale) in [("headline_scale", self.headline_scale), ("hint_scale", self.hint_scale)] {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(SceneError::Style(format!("{key} must be a positive number, got {scale}")));
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, SceneError> {
        toml::to_string_pretty(self).map_err(|e| SceneError::Style(e.to_string()))
    }

    /// Like [`ScreenStyle::load`], but falls back to the built-in style on error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(style) => {
                log::debug!("loaded screen style from {}", path.display());
                style
            }
            Err(e) => {
                log::warn!("{e}; using built-in style");
                Self::default()
            }
        }
    }

    pub fn for_outcome(
        &self,
        outcome: Outcome,
    ) -> &OutcomeStyle {
        match outcome {
            Outcome::Won => &self.won,
            Outcome::Lost => &self.lost,
        }
    }
}

/// Style file content; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutcomePatch {
    headline: Option<String>,
    background: Option<Rgba>,
    accent: Option<Rgba>,
}

impl OutcomePatch {
    fn apply(
        self,
        style: &mut OutcomeStyle,
    ) {
        if let Some(headline) = self.headline {
            style.headline = headline;
        }
        if let Some(background) = self.background {
            style.background = background;
        }
        if let Some(accent) = self.accent {
            style.accent = accent;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StylePatch {
    won: OutcomePatch,
    lost: OutcomePatch,
    hint: Option<String>,
    panel: Option<Rgba>,
    text: Option<Rgba>,
    headline_scale: Option<f32>,
    hint_scale: Option<f32>,
}

impl StylePatch {
    fn apply(
        self,
        style: &mut ScreenStyle,
    ) {
        self.won.apply(&mut style.won);
        self.lost.apply(&mut style.lost);
        if let Some(hint) = self.hint {
            style.hint = hint;
        }
        if let Some(panel) = self.panel {
            style.panel = panel;
        }
        if let Some(text) = self.text {
            style.text = text;
        }
        if let Some(scale) = self.headline_scale {
            style.headline_scale = scale;
        }
        if let Some(scale) = self.hint_scale {
            style.hint_scale = scale;
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_ANCHOR: &str = "body";
pub const DEFAULT_CSS_CLASS: &str = "tooltip";
pub const DEFAULT_DISTANCE: i32 = 20;
pub const DEFAULT_DURATION_MS: u32 = 120;
pub const DEFAULT_EASING: &str = "easeOutQuad";

/// Fully resolved tooltip configuration, fixed for one `attach` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TipConfig {
    /// CSS selector of the container tooltip nodes are appended to
    pub anchor: String,
    /// Region index used when an image map has more than one area
    pub area: usize,
    /// Explicit caption; empty means derive it from `alt`/`title`
    pub caption: String,
    pub css_class: String,
    /// Pixels the tooltip rises while fading in
    pub distance: i32,
    /// Animation duration in milliseconds
    pub duration: u32,
    pub easing: String,
    pub x: i32,
    pub y: i32,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR.to_string(),
            area: 0,
            caption: String::new(),
            css_class: DEFAULT_CSS_CLASS.to_string(),
            distance: DEFAULT_DISTANCE,
            duration: DEFAULT_DURATION_MS,
            easing: DEFAULT_EASING.to_string(),
            x: 0,
            y: 0,
        }
    }
}

impl TipConfig {
    /// Parse caller options from JSON and merge them onto the defaults
    ///
    /// # Errors
    ///
    /// Returns `TipError::Config` if the JSON is malformed or names an unknown option.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: TipOptions = serde_json::from_str(json)?;
        Ok(options.merge_onto(Self::default()))
    }
}

/// Caller supplied options; any field left out keeps its default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TipOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

impl TipOptions {
    /// Overlay the set fields onto `base`
    #[must_use]
    pub fn merge_onto(self, base: TipConfig) -> TipConfig {
        TipConfig {
            anchor: self.anchor.unwrap_or(base.anchor),
            area: self.area.unwrap_or(base.area),
            caption: self.caption.unwrap_or(base.caption),
            css_class: self.css_class.unwrap_or(base.css_class),
            distance: self.distance.unwrap_or(base.distance),
            duration: self.duration.unwrap_or(base.duration),
            easing: self.easing.unwrap_or(base.easing),
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
        }
    }
}

impl From<TipOptions> for TipConfig {
    fn from(options: TipOptions) -> Self {
        options.merge_onto(Self::default())
    }
}

//! Configuration types for SDFV rendering.
//!
//! [`RenderConfig`] implements [`serde::Deserialize`] so hosts can load it
//! from any format. Colors are kept as strings until
//! [`Theme::from_config`] resolves them once, before the first frame.
//!
//! # Example
//!
//! ```
//! # use sdfv::config::{RenderConfig, Theme};
//! let theme = Theme::from_config(&RenderConfig::default()).unwrap();
//! assert_eq!(theme.line_height(), 10.0);
//! ```

use serde::Deserialize;

use sdfv_core::color::Color;

use crate::{error::SdfvError, highlight::Highlight};

const DEFAULT_LINE_HEIGHT: f32 = 10.0;
const DEFAULT_ARROW_SIZE: f32 = 3.0;
const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Top-level render configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Height of one text line; drives label placement.
    #[serde(default = "default_line_height")]
    line_height: f32,

    /// Arrowhead size: half the base width and half the depth.
    #[serde(default = "default_arrow_size")]
    arrow_size: f32,

    /// Font family used by the SVG backend.
    #[serde(default = "default_font_family")]
    font_family: String,

    /// Color overrides.
    #[serde(default)]
    style: StyleConfig,
}

fn default_line_height() -> f32 {
    DEFAULT_LINE_HEIGHT
}

fn default_arrow_size() -> f32 {
    DEFAULT_ARROW_SIZE
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the specified metrics and style.
    pub fn new(line_height: f32, arrow_size: f32, style: StyleConfig) -> Self {
        Self {
            line_height,
            arrow_size,
            font_family: default_font_family(),
            style,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn arrow_size(&self) -> f32 {
        self.arrow_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_LINE_HEIGHT,
            DEFAULT_ARROW_SIZE,
            StyleConfig::default(),
        )
    }
}

/// Color overrides as CSS color strings. Unset fields use the built-in palette.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Fill of state rectangles.
    #[serde(default)]
    state_fill: Option<String>,

    /// Fill of connector ellipses.
    #[serde(default)]
    connector_fill: Option<String>,

    /// Fill of dataflow node shapes.
    #[serde(default)]
    node_fill: Option<String>,

    /// Label color.
    #[serde(default)]
    text: Option<String>,

    /// Stroke color of elements that are not highlighted.
    #[serde(default)]
    stroke: Option<String>,

    /// Stroke color of hovered elements.
    #[serde(default)]
    hover: Option<String>,

    /// Stroke color of selected elements.
    #[serde(default)]
    select: Option<String>,
}

impl StyleConfig {
    /// Overrides the selection color (builder style).
    pub fn with_select(mut self, color: impl Into<String>) -> Self {
        self.select = Some(color.into());
        self
    }

    /// Overrides the hover color (builder style).
    pub fn with_hover(mut self, color: impl Into<String>) -> Self {
        self.hover = Some(color.into());
        self
    }
}

/// Fully resolved drawing parameters for one renderer.
#[derive(Debug, Clone)]
pub struct Theme {
    line_height: f32,
    arrow_size: f32,
    font_family: String,
    state_fill: Color,
    connector_fill: Color,
    node_fill: Color,
    text: Color,
    stroke: Color,
    hover: Color,
    select: Color,
}

impl Theme {
    /// Resolves every configured color string.
    ///
    /// # Errors
    ///
    /// Returns [`SdfvError::Config`] if a configured color cannot be parsed.
    pub fn from_config(config: &RenderConfig) -> Result<Self, SdfvError> {
        let style = config.style();
        Ok(Self {
            line_height: config.line_height(),
            arrow_size: config.arrow_size(),
            font_family: config.font_family().to_string(),
            state_fill: resolve(style.state_fill.as_deref(), "#deebf7")?,
            connector_fill: resolve(style.connector_fill.as_deref(), "#f0fdff")?,
            node_fill: resolve(style.node_fill.as_deref(), "white")?,
            text: resolve(style.text.as_deref(), "black")?,
            stroke: resolve(style.stroke.as_deref(), "black")?,
            hover: resolve(style.hover.as_deref(), "green")?,
            select: resolve(style.select.as_deref(), "red")?,
        })
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn arrow_size(&self) -> f32 {
        self.arrow_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn state_fill(&self) -> Color {
        self.state_fill
    }

    pub fn connector_fill(&self) -> Color {
        self.connector_fill
    }

    pub fn node_fill(&self) -> Color {
        self.node_fill
    }

    pub fn text(&self) -> Color {
        self.text
    }

    /// Returns the stroke color for a highlight mode.
    pub fn stroke_color(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::Select => self.select,
            Highlight::Hover => self.hover,
            Highlight::None => self.stroke,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default()).expect("built-in palette is valid")
    }
}

fn resolve(configured: Option<&str>, fallback: &str) -> Result<Color, SdfvError> {
    Color::new(configured.unwrap_or(fallback))
        .map_err(|err| SdfvError::Config(format!("Invalid color in config: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_palette() {
        let theme = Theme::default();

        assert_eq!(theme.stroke_color(Highlight::Select), Color::new("red").unwrap());
        assert_eq!(theme.stroke_color(Highlight::Hover), Color::new("green").unwrap());
        assert_eq!(theme.stroke_color(Highlight::None), Color::new("black").unwrap());
        assert_eq!(theme.state_fill(), Color::new("#deebf7").unwrap());
        assert_eq!(theme.connector_fill(), Color::new("#f0fdff").unwrap());
        assert_eq!(theme.line_height(), 10.0);
        assert_eq!(theme.arrow_size(), 3.0);
    }

    #[test]
    fn test_config_from_toml() {
        let config: RenderConfig = toml::from_str(
            r##"
            line_height = 14.0

            [style]
            select = "#ff8800"
            "##,
        )
        .unwrap();

        assert_eq!(config.line_height(), 14.0);
        assert_eq!(config.arrow_size(), 3.0);
        assert_eq!(config.font_family(), "sans-serif");

        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(
            theme.stroke_color(Highlight::Select),
            Color::new("#ff8800").unwrap()
        );
        assert_eq!(theme.stroke_color(Highlight::Hover), Color::new("green").unwrap());
    }

    #[test]
    fn test_invalid_color_is_config_error() {
        let style = StyleConfig::default().with_hover("not-a-color");
        let config = RenderConfig::new(10.0, 3.0, style);

        let err = Theme::from_config(&config).unwrap_err();
        assert!(matches!(err, SdfvError::Config(_)));
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: RenderConfig = toml::from_str("").unwrap();
        assert_eq!(config.line_height(), 10.0);
        assert!(Theme::from_config(&config).is_ok());
    }
}

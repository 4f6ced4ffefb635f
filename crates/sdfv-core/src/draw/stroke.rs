//! Stroke and line-style definitions.
//!
//! - [`StrokeDefinition`]: color, width and dash style of one stroke call
//! - [`StrokeStyle`]: the line pattern (solid or dashed)
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # Quick Start
//!
//! ```
//! use sdfv_core::draw::{StrokeDefinition, StrokeStyle};
//! use sdfv_core::color::Color;
//!
//! // Border of a non-transient stream container
//! let stroke = StrokeDefinition::dashed(Color::default(), 3.0);
//! assert_eq!(stroke.style().dash_pattern(), [5.0, 3.0]);
//!
//! // Plain 1px border
//! let stroke = StrokeDefinition::solid(Color::default(), 1.0);
//! assert_eq!(stroke.style().dash_pattern(), [1.0, 0.0]);
//! ```

use crate::color::Color;

/// Defines the visual pattern of a stroke.
///
/// | Variant | Canvas line dash | SVG `stroke-dasharray` |
/// |---------|------------------|------------------------|
/// | `Solid` | `[1, 0]` | not set |
/// | `Dashed` | `[5, 3]` | `"5,3"` |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// 5px dash, 3px gap. Used for stream containers and consume scopes.
    Dashed,
}

impl StrokeStyle {
    /// Returns the canvas line-dash pattern as `[dash, gap]`.
    pub fn dash_pattern(self) -> [f32; 2] {
        match self {
            Self::Solid => [1.0, 0.0],
            Self::Dashed => [5.0, 3.0],
        }
    }

    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => {
                let [dash, gap] = self.dash_pattern();
                Some(format!("{dash},{gap}"))
            }
        }
    }
}

/// A stroke definition for one stroke call.
///
/// Every [`DrawContext::stroke`](crate::draw::DrawContext::stroke) call takes
/// a complete definition, so there is no line width or dash state to reset
/// between elements.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width and, when not solid, the dash pattern.
///
/// ```
/// use sdfv_core::draw::StrokeDefinition;
/// use sdfv_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::dashed(Color::default(), 1.0);
/// let path = svg_element::Path::new().set("d", "M 0 0 L 10 0");
/// let path = sdfv_core::apply_stroke!(path, &stroke);
/// assert!(path.to_string().contains("stroke-dasharray"));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

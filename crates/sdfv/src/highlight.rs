//! Highlight modes and where they come from.
//!
//! Hit-testing and selection live in the host. The renderer only consumes
//! their result: one [`Highlight`] per element, asked of a [`HighlightSource`]
//! at draw time.

use crate::element::Element;

/// Presentation state of an element. Only affects stroke color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Highlight {
    #[default]
    None,
    Hover,
    Select,
}

impl Highlight {
    pub fn is_highlighted(self) -> bool {
        self != Self::None
    }
}

/// Decides the highlight mode of each element during a draw traversal.
///
/// A bare [`Highlight`] applies the same mode to every element. Any closure
/// `Fn(&Element) -> Highlight` decides per element.
///
/// # Examples
///
/// ```
/// # use sdfv::{element::Element, highlight::{Highlight, HighlightSource}};
/// let selected_state = 2;
/// let source = move |element: &Element<'_>| {
///     if element.parent_id().is_none() && element.id() == selected_state {
///         Highlight::Select
///     } else {
///         Highlight::None
///     }
/// };
/// # let _: &dyn HighlightSource = &source;
/// ```
pub trait HighlightSource {
    fn highlight(&self, element: &Element<'_>) -> Highlight;
}

impl HighlightSource for Highlight {
    fn highlight(&self, _element: &Element<'_>) -> Highlight {
        *self
    }
}

impl<F> HighlightSource for F
where
    F: Fn(&Element<'_>) -> Highlight,
{
    fn highlight(&self, element: &Element<'_>) -> Highlight {
        self(element)
    }
}

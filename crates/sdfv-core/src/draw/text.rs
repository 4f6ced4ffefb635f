//! Text measurement backed by cosmic-text.

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

/// Measures label widths from real font metrics.
///
/// The underlying [`FontSystem`] is expensive to create, so it is shared by
/// every measure instance in the process.
#[derive(Debug, Clone)]
pub struct TextMeasure {
    font_family: String,
    font_size: f32,
}

impl TextMeasure {
    /// Creates a measure for the given font family and pixel size.
    pub fn new(font_family: impl Into<String>, font_size: f32) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the advance width of `text` in pixels.
    pub fn width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        FONT_SYSTEM
            .get_or_init(|| {
                info!("Initializing FontSystem");
                Arc::new(Mutex::new(FontSystem::new()))
            })
            .lock()
            .map(|mut font_system| self.shape_width(&mut font_system, text))
            .unwrap_or_else(|_| self.fallback_width(text))
    }

    fn shape_width(&self, font_system: &mut FontSystem, text: &str) -> f32 {
        let metrics = Metrics::new(self.font_size, self.font_size * 1.15);

        let mut buffer = Buffer::new(font_system, metrics);
        let mut buffer = buffer.borrow_with(font_system);

        let attrs = Attrs::new().family(Family::Name(&self.font_family));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|glyph| glyph.x + glyph.w))
            .fold(0.0_f32, f32::max);

        if width > 0.0 {
            width
        } else {
            self.fallback_width(text)
        }
    }

    fn fallback_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.font_size * 0.55
    }
}

impl Default for TextMeasure {
    fn default() -> Self {
        Self::new("sans-serif", 10.0)
    }
}

static FONT_SYSTEM: OnceLock<Arc<Mutex<FontSystem>>> = OnceLock::new();

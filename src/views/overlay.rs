// src/views/overlay.rs
//
// Quote and title text overlays. Quotes live in document space (y grows
// downward from the document top); a quote is visible while its band
// intersects the viewport, with both bounds strict.

use nannou::prelude::*;

/// scroll_y beyond which the title switches to its compact "scrolled" look.
pub const SCROLLED_THRESHOLD: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct Quote {
    pub text: String,
    pub doc_y: f32,
    pub height: f32,
    visible: bool,
}

impl Quote {
    pub fn new(text: String, doc_y: f32, height: f32) -> Self {
        Self {
            text,
            doc_y,
            height,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

pub struct Overlay {
    title_text: String,
    title_opacity: f32,
    title_scrolled: bool,
    title_font_size: u32,
    quote_font_size: u32,
    quotes: Vec<Quote>,
}

impl Overlay {
    pub fn new(
        title_text: String,
        quotes: Vec<Quote>,
        title_font_size: u32,
        quote_font_size: u32,
    ) -> Self {
        Self {
            title_text,
            title_opacity: 1.0,
            title_scrolled: false,
            title_font_size,
            quote_font_size,
            quotes,
        }
    }

    /// Visibility pass plus the two independent title rules.
    pub fn apply_scroll(&mut self, scroll_y: f32, viewport_height: f32) {
        let mut any_visible = false;
        for quote in &mut self.quotes {
            let top = quote.doc_y - scroll_y;
            let bottom = top + quote.height;
            quote.visible = top < viewport_height && bottom > 0.0;
            any_visible |= quote.visible;
        }

        self.title_opacity = if any_visible { 0.0 } else { 1.0 };
        self.title_scrolled = scroll_y > SCROLLED_THRESHOLD;
    }

    pub fn draw(&self, draw: &Draw, viewport: Vec2, scroll_y: f32) {
        // title pinned near the window top; compact once scrolled
        let (font_size, title_y) = if self.title_scrolled {
            (self.title_font_size / 2, viewport.y / 2.0 - 36.0)
        } else {
            (self.title_font_size, viewport.y / 2.0 - 90.0)
        };
        draw.text(&self.title_text)
            .color(rgba(1.0, 1.0, 1.0, self.title_opacity))
            .font_size(font_size)
            .w(viewport.x * 0.9)
            .x_y(0.0, title_y);

        for quote in self.quotes.iter().filter(|q| q.is_visible()) {
            let top = quote.doc_y - scroll_y;
            let center_y = viewport.y / 2.0 - (top + quote.height / 2.0);
            draw.text(&quote.text)
                .color(rgba(1.0, 1.0, 1.0, 0.92))
                .font_size(self.quote_font_size)
                .w(viewport.x * 0.7)
                .x_y(0.0, center_y);
        }
    }

    pub fn title_opacity(&self) -> f32 {
        self.title_opacity
    }

    pub fn is_scrolled(&self) -> bool {
        self.title_scrolled
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn any_quote_visible(&self) -> bool {
        self.quotes.iter().any(Quote::is_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_with(quotes: Vec<Quote>) -> Overlay {
        Overlay::new("a potato story".to_string(), quotes, 64, 28)
    }

    #[test]
    fn test_quote_visibility_bounds_are_strict() {
        let viewport_h = 800.0;
        let mut overlay = overlay_with(vec![
            // top lands exactly at the viewport bottom edge: not visible
            Quote::new("below".into(), 800.0, 120.0),
            // bottom lands exactly at the viewport top edge: not visible
            Quote::new("above".into(), -120.0, 120.0),
            // one pixel inside from either side: visible
            Quote::new("just entering".into(), 799.0, 120.0),
            Quote::new("just leaving".into(), -119.0, 120.0),
        ]);
        overlay.apply_scroll(0.0, viewport_h);

        let quotes = overlay.quotes();
        assert!(!quotes[0].is_visible());
        assert!(!quotes[1].is_visible());
        assert!(quotes[2].is_visible());
        assert!(quotes[3].is_visible());
    }

    #[test]
    fn test_title_hides_while_any_quote_is_visible() {
        let mut overlay = overlay_with(vec![
            Quote::new("one".into(), 1200.0, 150.0),
            Quote::new("two".into(), 2400.0, 150.0),
        ]);

        overlay.apply_scroll(0.0, 800.0);
        assert!(!overlay.any_quote_visible());
        assert_eq!(overlay.title_opacity(), 1.0);

        overlay.apply_scroll(1000.0, 800.0);
        assert!(overlay.any_quote_visible());
        assert_eq!(overlay.title_opacity(), 0.0);
    }

    #[test]
    fn test_scrolled_state_is_independent_of_opacity() {
        let mut overlay = overlay_with(vec![Quote::new("q".into(), 150.0, 100.0)]);

        // quote visible AND past the threshold: both rules hold at once
        overlay.apply_scroll(101.0, 800.0);
        assert!(overlay.is_scrolled());
        assert_eq!(overlay.title_opacity(), 0.0);

        // exactly at the threshold is not yet scrolled
        let mut overlay = overlay_with(vec![]);
        overlay.apply_scroll(100.0, 800.0);
        assert!(!overlay.is_scrolled());
        assert_eq!(overlay.title_opacity(), 1.0);
    }
}

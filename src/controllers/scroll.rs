// src/controllers/scroll.rs
//
// Virtual document scroll state. The window is the viewport onto a
// taller fixed-height document; wheel, key and OSC input all funnel
// into scroll_y, and everything downstream reads the derived percent.

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct ScrollState {
    scroll_y: f32,
    document_height: f32,
    viewport: Vec2,
}

impl ScrollState {
    pub fn new(document_height: f32, viewport: Vec2) -> Self {
        Self {
            scroll_y: 0.0,
            document_height,
            viewport,
        }
    }

    /// Scrollable range; zero when the document fits in the viewport.
    fn max_scroll(&self) -> f32 {
        (self.document_height - self.viewport.y).max(0.0)
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Scroll progress in [0,1]. 0 when the document has no scrollable
    /// extent (guards the zero-denominator case).
    pub fn percent(&self) -> f32 {
        let range = self.document_height - self.viewport.y;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / range).clamp(0.0, 1.0)
    }

    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    pub fn scroll_by(&mut self, dy: f32) {
        self.scroll_to(self.scroll_y + dy);
    }

    pub fn scroll_to_percent(&mut self, percent: f32) {
        self.scroll_to(percent.clamp(0.0, 1.0) * self.max_scroll());
    }

    /// Window resize. scroll_y is re-clamped against the new range.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.scroll_to(self.scroll_y);
    }
}

// src/views/background.rs
//
// Palette-driven background color. The scroll percent selects a blend
// between adjacent palette entries; the manager holds the resulting
// color and paints it each frame.

use crate::utilities::color::{lerp_rgb, parse_hex};
use nannou::prelude::*;
use std::error::Error;

/// Ordered, non-empty list of background colors.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn from_hex(entries: &[String]) -> Result<Self, Box<dyn Error>> {
        if entries.is_empty() {
            return Err("palette must contain at least one color".into());
        }
        let colors = entries
            .iter()
            .map(|entry| parse_hex(entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Blend for `percent` in [0,1]: floor picks the segment, the
    /// fractional part interpolates within it. Out-of-range input is
    /// clamped; a single-entry palette always returns that entry.
    pub fn sample(&self, percent: f32) -> Rgb {
        let last = self.colors.len() - 1;
        if last == 0 {
            return self.colors[0];
        }

        let scaled = percent.clamp(0.0, 1.0) * last as f32;
        let index = scaled.floor() as usize;
        let next = (index + 1).min(last);
        lerp_rgb(self.colors[index], self.colors[next], scaled.fract())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

pub struct BackgroundManager {
    palette: Palette,
    current_color: Rgb,
}

impl BackgroundManager {
    pub fn new(palette: Palette) -> Self {
        let current_color = palette.sample(0.0);
        Self {
            palette,
            current_color,
        }
    }

    pub fn set_scroll(&mut self, percent: f32) {
        self.current_color = self.palette.sample(percent);
    }

    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.current_color);
    }

    pub fn current_color(&self) -> Rgb {
        self.current_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(entries: &[&str]) -> Palette {
        let owned: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
        Palette::from_hex(&owned).unwrap()
    }

    #[test]
    fn test_endpoints_are_exact() {
        let p = palette(&["#696d7d", "#6F9283", "#8D9F87", "#CDC6A5", "#F0DCCA"]);
        let first = p.sample(0.0);
        assert!((first.red - 0x69 as f32 / 255.0).abs() < 1e-6);
        assert!((first.green - 0x6d as f32 / 255.0).abs() < 1e-6);

        let lastc = p.sample(1.0);
        assert!((lastc.red - 0xf0 as f32 / 255.0).abs() < 1e-6);
        assert!((lastc.blue - 0xca as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_two_color_midpoint_is_mid_gray() {
        let p = palette(&["#000000", "#ffffff"]);
        let mid = p.sample(0.5);
        assert!((mid.red * 255.0 - 127.5).abs() <= 1.0);
        assert!((mid.green * 255.0 - 127.5).abs() <= 1.0);
        assert!((mid.blue * 255.0 - 127.5).abs() <= 1.0);
    }

    #[test]
    fn test_out_of_range_percent_is_clamped() {
        let p = palette(&["#000000", "#ffffff"]);
        assert_eq!(p.sample(-0.4).red, 0.0);
        assert_eq!(p.sample(1.7).red, 1.0);
    }

    #[test]
    fn test_single_entry_palette() {
        let p = palette(&["#8D9F87"]);
        for percent in [0.0, 0.33, 1.0] {
            let c = p.sample(percent);
            assert!((c.red - 0x8d as f32 / 255.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_palette_is_an_error() {
        assert!(Palette::from_hex(&[]).is_err());
    }

    #[test]
    fn test_manager_starts_on_first_entry() {
        let manager = BackgroundManager::new(palette(&["#696d7d", "#F0DCCA"]));
        assert!((manager.current_color().red - 0x69 as f32 / 255.0).abs() < 1e-6);
    }
}

// src/utilities/color.rs
//
// hex color parsing and channel interpolation for the background palette

use nannou::prelude::*;
use std::error::Error;

/// Parse a `#rrggbb` (or `rrggbb`) string into an Rgb<f32>.
pub fn parse_hex(hex: &str) -> Result<Rgb, Box<dyn Error>> {
    let re = regex::Regex::new(r"^#?([0-9a-fA-F]{6})$")?;
    let caps = re
        .captures(hex.trim())
        .ok_or_else(|| format!("invalid hex color: '{}'", hex))?;
    let digits = &caps[1];

    let r = u8::from_str_radix(&digits[0..2], 16)?;
    let g = u8::from_str_radix(&digits[2..4], 16)?;
    let b = u8::from_str_radix(&digits[4..6], 16)?;

    Ok(rgb(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

/// Per-channel linear interpolation between two colors.
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    rgb(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}

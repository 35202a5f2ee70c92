// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub bundle_file: String,
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
}

#[derive(Debug, Deserialize)]
pub struct ScrollConfig {
    pub document_height: f32,
    pub wheel_line_height: f32, // px per wheel line tick
    pub key_step: f32,          // px per arrow key press
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    pub tween_duration: f32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub mesh_scale: f32,
    pub drifter_color: String,
    pub title_font_size: u32,
    pub quote_font_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TitleConfig {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct QuoteConfig {
    pub text: String,
    pub doc_y: f32,
    pub height: f32,
}

// Typography Token System

use zoon::*;

// Font Families
pub const FONT_FAMILY_SANS: &str = "'Inter', 'system-ui', 'Segoe UI', 'Arial', sans-serif";
pub const FONT_FAMILY_MONO: &str = "'Fira Code', 'Menlo', 'Monaco', 'Consolas', monospace";

// Font Sizes
pub const FONT_SIZE_12: u32 = 12;
pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_20: u32 = 20;
pub const FONT_SIZE_24: u32 = 24;
pub const FONT_SIZE_30: u32 = 30;
pub const FONT_SIZE_36: u32 = 36;
pub const FONT_SIZE_48: u32 = 48;
// Hero headline and the 404 figure
pub const FONT_SIZE_60: u32 = 60;
pub const FONT_SIZE_96: u32 = 96;

// Font Weights
pub const FONT_WEIGHT_4: u32 = 400; // Normal
pub const FONT_WEIGHT_5: u32 = 500; // Medium
pub const FONT_WEIGHT_6: u32 = 600; // Semibold
pub const FONT_WEIGHT_7: u32 = 700; // Bold

// Line Heights (percentages, the unit MoonZoon's Font works with)
pub const LINE_HEIGHT_120: u32 = 120;
pub const LINE_HEIGHT_140: u32 = 140;
pub const LINE_HEIGHT_160: u32 = 160;

pub fn font_sans() -> impl Style<'static> {
    Font::new().family([FontFamily::new(FONT_FAMILY_SANS)])
}

pub fn font_mono() -> impl Style<'static> {
    Font::new().family([FontFamily::new(FONT_FAMILY_MONO)])
}

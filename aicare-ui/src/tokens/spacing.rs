// Spacing Token System

pub const SPACING_2: u32 = 2;
pub const SPACING_4: u32 = 4;
pub const SPACING_6: u32 = 6;
pub const SPACING_8: u32 = 8;
pub const SPACING_10: u32 = 10;
pub const SPACING_12: u32 = 12;
pub const SPACING_16: u32 = 16;
pub const SPACING_20: u32 = 20;
pub const SPACING_24: u32 = 24;
pub const SPACING_32: u32 = 32;
pub const SPACING_40: u32 = 40;
pub const SPACING_48: u32 = 48;
pub const SPACING_64: u32 = 64;

// Vertical rhythm of full-width marketing sections
pub const SPACING_80: u32 = 80;
pub const SPACING_96: u32 = 96;

// Content column used by every page section
pub const CONTENT_MAX_WIDTH: u32 = 1140;

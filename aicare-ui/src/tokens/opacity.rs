// Opacity Token System
// Raw-style values; zoon has no Opacity style so these feed update_raw_el.

pub const OPACITY_NONE: &str = "0";
pub const OPACITY_DISABLED: &str = "0.6";
pub const OPACITY_MUTED: &str = "0.8";
pub const OPACITY_OPAQUE: &str = "1";

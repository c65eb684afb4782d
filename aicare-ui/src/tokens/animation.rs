// Animation Token System
// Built on MoonZoon's Transitions/Tweened.

use zoon::*;

// Animation Durations (milliseconds)
pub const DURATION_FAST: u32 = 150;
pub const DURATION_NORMAL: u32 = 300;
pub const DURATION_SLOW: u32 = 500;
// Entrance reveals run a touch longer than interaction feedback
pub const DURATION_REVEAL: u32 = 700;

pub use zoon::ease;

pub fn transition_fast() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_FAST)])
}

pub fn transition_normal() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_NORMAL)])
}

/// Color-only transition; every themed surface uses this so a theme toggle
/// animates uniformly instead of snapping.
pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_NORMAL),
        Transition::property("border-color").duration(DURATION_NORMAL),
        Transition::property("color").duration(DURATION_NORMAL),
    ])
}

pub fn transition_transform() -> impl Style<'static> {
    Transitions::new([Transition::property("transform").duration(DURATION_NORMAL)])
}

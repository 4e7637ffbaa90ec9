//! Color registry: the fixed, ordered set of six playable colors.
//!
//! Every other module refers to colors as `&'static Color` handed out by this
//! registry, so identity comparisons by name are always safe.

#[cfg(feature = "serde")]
use serde::Serialize;

/// A playable color. `code` is the presentation hint (a semantic style key such
/// as `danger` or `primary`) used for tinting buttons and the page background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Color {
    pub name: &'static str,
    pub code: &'static str,
}

pub const COLORS: [Color; 6] = [
    Color { name: "Red", code: "danger" },
    Color { name: "Blue", code: "primary" },
    Color { name: "Green", code: "success" },
    Color { name: "Yellow", code: "warning" },
    Color { name: "Purple", code: "secondary" },
    Color { name: "Orange", code: "info" },
];

/// Registry in display order.
pub fn registry() -> &'static [Color] {
    &COLORS
}

/// The color highlighted before the first tick of a game.
pub fn default_color() -> &'static Color {
    &COLORS[0]
}

/// Look a color up by its name (exact, case sensitive).
pub fn find(name: &str) -> Option<&'static Color> {
    COLORS.iter().find(|c| c.name == name)
}

/// CSS color for a style code. Unknown codes fall back to a neutral grey.
pub fn swatch(code: &str) -> &'static str {
    match code {
        "danger" => "#dc3545",
        "primary" => "#0d6efd",
        "success" => "#198754",
        "warning" => "#ffc107",
        "secondary" => "#6c757d",
        "info" => "#0dcaf0",
        _ => "#adb5bd",
    }
}

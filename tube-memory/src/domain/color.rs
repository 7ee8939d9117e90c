//! Published line colors.

/// Color used for lines missing from [`LINE_COLORS`].
pub const DEFAULT_LINE_COLOR: &str = "#000000";

/// Line name → color, in the order the network style lists them.
pub const LINE_COLORS: [(&str, &str); 14] = [
    ("Bakerloo", "#B26300"),
    ("Central", "#E32017"),
    ("Circle", "#FFD329"),
    ("District", "#007D32"),
    ("Hammersmith & City", "#F4A9BE"),
    ("Jubilee", "#A0A5A9"),
    ("Metropolitan", "#9B0056"),
    ("Northern", "#000000"),
    ("Piccadilly", "#0019A8"),
    ("Victoria", "#0098D8"),
    ("Waterloo & City", "#76D0BD"),
    ("London Overground", "#EF7B10"),
    ("DLR", "#00AFAD"),
    ("Tramlink", "#66CC00"),
];

/// Look up a line's color by its display name.
pub fn line_color(display_name: &str) -> Option<&'static str> {
    LINE_COLORS
        .iter()
        .find(|(name, _)| *name == display_name)
        .map(|(_, color)| *color)
}

/// Like [`line_color`], falling back to [`DEFAULT_LINE_COLOR`].
pub fn line_color_or_default(display_name: &str) -> &'static str {
    line_color(display_name).unwrap_or(DEFAULT_LINE_COLOR)
}

//! Page chrome constants: colour palettes, themed artwork, menu animation.

/// CSS custom properties rewritten by the theme switch, in the order they
/// are applied.
pub mod palette {
    pub const VARIABLES: [&str; 5] = [
        "--bg-colour",
        "--text-colour-one",
        "--text-colour-two",
        "--icon-background",
        "--element-colour",
    ];

    pub const LIGHT: [&str; 5] =
        ["#ffffff", "#393346", "#a7a3af", "#e9e7ee", "#393346"];

    pub const DARK: [&str; 5] =
        ["#2c2b2f", "#e0e0e0", "#bdbdbd", "#333", "#e0e0e0"];
}

/// Illustrations that ship a light and a dark variant.
pub mod artwork {
    /// `(element id, image stem)`; the dark variant appends `-dark`.
    pub const THEMED: [(&str, &str); 4] = [
        ("brain-scribble", "brain-scribble"),
        ("star-scribble", "star-scribble"),
        ("green-watches", "green-watches"),
        ("arrow-scribble", "arrow-scribble"),
    ];
    pub const IMAGE_DIR: &str = "/images";
}

/// Burger icon keyframes.
pub mod menu {
    pub const OPENING_ANIMATION: &str = "close-burger-menu";
    pub const CLOSING_ANIMATION: &str = "open-burger-menu";
    pub const ANIMATION_MS: u64 = 700;
}

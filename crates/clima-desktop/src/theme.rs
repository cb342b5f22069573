//! Color palette for the desktop app

/// Colors shared by the screens.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    /// Background of the login screen
    pub login_bg: &'static str,
    /// Accent used for the login title, labels, borders, and button
    pub login_accent: &'static str,
}

pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#f5f7fa",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    login_bg: "#EDE0D4",
    login_accent: "#4B2E1E",
};

//! App theme: colors and spacing for the EventHub storefront.

/// Brand colors. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#7C3AED";
    pub const LIGHT_SURFACE: &'static str = "#FFFFFF";
    pub const LIGHT_ON_SURFACE: &'static str = "#1C1B22";
    pub const LIGHT_MUTED: &'static str = "#6B7280";
    pub const LIGHT_SUCCESS: &'static str = "#16A34A";
    pub const LIGHT_WARNING: &'static str = "#EA580C";
    pub const LIGHT_ERROR: &'static str = "#DC2626";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#A78BFA";
    pub const DARK_SURFACE: &'static str = "#17161B";
    pub const DARK_ON_SURFACE: &'static str = "#E7E4EC";
    pub const DARK_MUTED: &'static str = "#9CA3AF";
    pub const DARK_SUCCESS: &'static str = "#22C55E";
    pub const DARK_WARNING: &'static str = "#FB923C";
    pub const DARK_ERROR: &'static str = "#F87171";

    /// Brand gradient used by the hero, badges and primary buttons.
    pub const GRADIENT_PRIMARY: &'static str = "linear-gradient(135deg, #7C3AED, #DB2777)";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn muted(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_MUTED
        } else {
            Self::LIGHT_MUTED
        }
    }
    pub fn success(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SUCCESS
        } else {
            Self::LIGHT_SUCCESS
        }
    }
    pub fn warning(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_WARNING
        } else {
            Self::LIGHT_WARNING
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
}

/// 8dp grid spacing.
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const XL: &'static str = "32px";
    pub const CARD_PADDING: &'static str = "16px";
    pub const SCREEN_PADDING: &'static str = "16px";
}

//! Palette values needed outside the stylesheet.

/// Page background `hsl(222 47% 6%)` as RGBA, painted by the desktop
/// window before the first frame
pub const BACKGROUND_RGBA: (u8, u8, u8, u8) = (8, 12, 22, 255);

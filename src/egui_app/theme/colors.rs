//! Color constants for the factual theme.
//!
//! Dark slate panels with a single teal accent; match scores use a
//! red / amber / green scale.

use eframe::egui::Color32;

/// Page background
pub const BG_DARK: Color32 = Color32::from_rgb(0x12, 0x16, 0x1C);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1B, 0x21, 0x2A);

/// Result card and dialog background
pub const CARD_BG: Color32 = Color32::from_rgb(0x22, 0x2A, 0x35);

/// Card and dialog border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x33, 0x3F, 0x4E);

/// Text input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x2A, 0x33, 0x40);

/// Hovered widget background
pub const HOVER_BG: Color32 = Color32::from_rgb(0x3A, 0x47, 0x57);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEC, 0xF1);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA5, 0xB4);

/// Accent color for primary buttons and links
pub const ACCENT: Color32 = Color32::from_rgb(0x1F, 0x9E, 0x8F);

/// Error color
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Informational banner text
pub const INFO: Color32 = Color32::from_rgb(0x7F, 0xC8, 0xF8);

/// Strong match
pub const MATCH_HIGH: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Partial match
pub const MATCH_MEDIUM: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Weak match
pub const MATCH_LOW: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

//! Theme constants for the Connect-N GUI

use egui::Color32;

use crate::board::Token;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(38, 84, 160);
pub const HOLE_BG: Color32 = Color32::from_rgb(28, 30, 34);

// Token colors
pub const RED_TOKEN: Color32 = Color32::from_rgb(220, 55, 55);
pub const RED_TOKEN_HIGHLIGHT: Color32 = Color32::from_rgb(245, 120, 120);
pub const BLUE_TOKEN: Color32 = Color32::from_rgb(70, 150, 240);
pub const BLUE_TOKEN_HIGHLIGHT: Color32 = Color32::from_rgb(150, 200, 255);
pub const OTHER_TOKEN: Color32 = Color32::from_rgb(170, 170, 175);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 30)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const TOKEN_RADIUS_RATIO: f32 = 0.40;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Fill and highlight colors for a token
pub fn token_colors(token: Token) -> Option<(Color32, Color32)> {
    match token {
        Token::Empty => None,
        Token::Player(0) => Some((RED_TOKEN, RED_TOKEN_HIGHLIGHT)),
        Token::Player(1) => Some((BLUE_TOKEN, BLUE_TOKEN_HIGHLIGHT)),
        Token::Player(_) => Some((OTHER_TOKEN, TEXT_PRIMARY)),
    }
}

//! Player colors: parsing configured names and generating random ones.

use std::str::FromStr;

use rand::Rng;
use ratatui::style::Color;

use crate::game::Player;

/// Parse a color name (`"red"`, `"lightblue"`) or hex code (`"#1E90FF"`).
pub fn parse_color(name: &str) -> Option<Color> {
    Color::from_str(name.trim()).ok()
}

/// A random `#RRGGBB` color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let rgb: u32 = rng.random_range(0..=0xFF_FFFF);
    format!("#{rgb:06X}")
}

/// Display color of a player, white if its color does not parse.
pub fn player_color(player: &Player) -> Color {
    parse_color(player.color()).unwrap_or(Color::White)
}

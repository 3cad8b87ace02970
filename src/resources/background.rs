//! Background color resources.
//!
//! [`BackgroundColor`] keeps the clear color both as the `#RRGGBB` string it
//! was set from and as a ready-to-draw [`Color`]. [`ColorRng`] is the random
//! source for [`BackgroundColor::randomize`].

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use raylib::prelude::Color;

/// Background of the demo scene at startup.
pub const DEFAULT_BACKGROUND: &str = "#123456";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Resource, Debug, Clone)]
pub struct BackgroundColor {
    pub hex: String,
    pub color: Color,
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self {
            hex: DEFAULT_BACKGROUND.to_string(),
            color: Color::new(0x12, 0x34, 0x56, 0xff),
        }
    }
}

impl BackgroundColor {
    /// Build from a `#RRGGBB` (or `RRGGBB`) string.
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let color = parse_hex_color(hex)?;
        let digits = hex.trim_start_matches('#').to_ascii_uppercase();
        Ok(Self {
            hex: format!("#{digits}"),
            color,
        })
    }

    /// Replace the color with a random one and return the new hex string.
    pub fn randomize(&mut self, rng: &mut Rng) -> &str {
        let hex = random_hex_color(rng);
        // random_hex_color only emits valid digits
        if let Ok(color) = parse_hex_color(&hex) {
            self.color = color;
            self.hex = hex;
        }
        &self.hex
    }
}

/// Random source for background colors. Seeded for reproducible runs.
#[derive(Resource, Debug, Clone)]
pub struct ColorRng(pub Rng);

impl ColorRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(Rng::with_seed(seed)),
            None => Self(Rng::new()),
        }
    }
}

/// A random color as `#` followed by six uppercase hex digits.
pub fn random_hex_color(rng: &mut Rng) -> String {
    let mut hex = String::with_capacity(7);
    hex.push('#');
    for _ in 0..6 {
        hex.push(HEX_DIGITS[rng.usize(..HEX_DIGITS.len())] as char);
    }
    hex
}

/// Parse `#RRGGBB` or `RRGGBB` into an opaque color.
pub fn parse_hex_color(hex: &str) -> Result<Color, String> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid color '{}', expected #RRGGBB", hex));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| format!("Invalid color '{}': {}", hex, e))
    };
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, 0xff))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())
    }

    #[test]
    fn test_default_is_123456() {
        let bg = BackgroundColor::default();
        assert_eq!(bg.hex, "#123456");
        assert_eq!(bg.color, Color::new(0x12, 0x34, 0x56, 0xff));
    }

    #[test]
    fn test_from_hex() {
        let bg = BackgroundColor::from_hex("#a0ff00").unwrap();
        assert_eq!(bg.hex, "#A0FF00");
        assert_eq!(bg.color, Color::new(0xa0, 0xff, 0x00, 0xff));

        let bare = BackgroundColor::from_hex("010203").unwrap();
        assert_eq!(bare.hex, "#010203");
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(BackgroundColor::from_hex("#12345").is_err());
        assert!(BackgroundColor::from_hex("#12345G").is_err());
        assert!(BackgroundColor::from_hex("").is_err());
    }

    #[test]
    fn test_random_hex_color_format() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..200 {
            assert!(is_hex_color(&random_hex_color(&mut rng)));
        }
    }

    #[test]
    fn test_randomize_updates_both_forms() {
        let mut rng = Rng::with_seed(42);
        let mut bg = BackgroundColor::default();
        let hex = bg.randomize(&mut rng).to_string();
        assert!(is_hex_color(&hex));
        assert_eq!(bg.color, parse_hex_color(&hex).unwrap());
    }

    #[test]
    fn test_randomize_rarely_repeats_initial() {
        let mut rng = Rng::with_seed(1234);
        let changed = (0..100)
            .filter(|_| {
                let mut bg = BackgroundColor::default();
                bg.randomize(&mut rng) != DEFAULT_BACKGROUND
            })
            .count();
        assert!(changed >= 99);
    }
}

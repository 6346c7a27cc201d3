//! Hex color parsing

/// Linear RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Parse a `#RRGGBB` (or `RRGGBB`) string, case-insensitive
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| -> Option<f32> {
            u8::from_str_radix(&digits[range], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };

        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Check whether a string is a valid hex color
pub fn is_hex_color(value: &str) -> bool {
    Rgb::from_hex(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let c = Rgb::from_hex("#FF8000").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);

        assert_eq!(Rgb::from_hex("ff8000"), Rgb::from_hex("#FF8000"));
    }

    #[test]
    fn test_reject_malformed_hex() {
        assert!(!is_hex_color("#FFF"));
        assert!(!is_hex_color("#GG0000"));
        assert!(!is_hex_color("#12345678"));
        assert!(!is_hex_color(""));
        assert!(!is_hex_color("#+F+F+F"));
        assert!(!is_hex_color("+FF+FF"));
    }
}

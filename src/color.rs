use anyhow::{Context, bail};

/// An RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Parses a `#RRGGBB` hex string, as used in the config file.
    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .with_context(|| format!("color {hex:?} must start with '#'"))?;
        // from_str_radix alone would accept a leading '+' in each pair.
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("color {hex:?} must have exactly six hex digits");
        }

        let channel = |i: usize| -> anyhow::Result<f32> {
            let byte = u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("color {hex:?} has an invalid hex digit"))?;
            Ok(byte as f32 / 255.0)
        };

        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let magenta = Rgba::from_hex("#FF00FF").unwrap();
        assert_eq!(magenta, Rgba::new(1.0, 0.0, 1.0, 1.0));

        let grey = Rgba::from_hex("#333333").unwrap();
        assert!((grey.r - 0.2).abs() < 1e-6);
        assert_eq!(grey.r, grey.g);
        assert_eq!(grey.g, grey.b);

        assert_eq!(Rgba::from_hex("#000000").unwrap(), Rgba::BLACK);
        assert!(Rgba::from_hex("#ff00ff").is_ok());
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(Rgba::from_hex("FF00FF").is_err());
        assert!(Rgba::from_hex("#FF00F").is_err());
        assert!(Rgba::from_hex("#GG0000").is_err());
        assert!(Rgba::from_hex("#FF00FF00").is_err());
        assert!(Rgba::from_hex("#ÿÿÿ").is_err());
        assert!(Rgba::from_hex("#+F+F+F").is_err());
        assert!(Rgba::from_hex("#-1-1-1").is_err());
    }
}

/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// Grey colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parse a `#rrggbb` colour. The leading `#` is optional and the digits are case
    /// insensitive. Anything that isn't exactly six hex digits falls back to
    /// [colours::DEFAULT_BACKGROUND].
    pub fn from_hex(hex: &str) -> Colour {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return colours::DEFAULT_BACKGROUND;
        }

        match u32::from_str_radix(digits, 16) {
            Ok(value) => Colour::new_rgb_bytes((value >> 16) as u8, (value >> 8) as u8, value as u8),
            Err(_) => colours::DEFAULT_BACKGROUND,
        }
    }

    /// The colour's components as bytes
    pub fn to_rgb_bytes(&self) -> [u8; 3] {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        match *self {
            Colour::RGB { r, g, b } => [byte(r), byte(g), byte(b)],
            Colour::Grey { g } => [byte(g); 3],
        }
    }

}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Light grey used for captions
    pub const MUTED: Colour = Colour::Grey { g: 200.0 / 255.0 };
    /// Dark navy, `#1a1a2e`
    pub const DEFAULT_BACKGROUND: Colour = Colour::RGB {
        r: 26.0 / 255.0,
        g: 26.0 / 255.0,
        b: 46.0 / 255.0,
    };
    /// Used for layout guides
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
}

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex color (leading `#` optional).
    pub fn from_hex(input: &str) -> Result<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(anyhow!("Invalid hex color: '{}'", input));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Self { r, g, b })
    }
}

/// Band colors for the calendar cells. One named structure instead of
/// literals scattered through the renderer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Palette {
    pub alert_incident: Rgb,
    pub alert_risk: Rgb,
    pub neutral: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alert_incident: Rgb::new(0xE3, 0x5A, 0x5A),
            alert_risk: Rgb::new(0xCF, 0xEC, 0x31),
            neutral: Rgb::new(0x66, 0xFF, 0x99),
        }
    }
}

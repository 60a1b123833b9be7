//! `#RRGGBB` colour strings, the form project and milestone colours are
//! stored in.

use egui::Color32;

/// Parse `#RRGGBB` or `#RRGGBBAA` into a colour.
pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
    let s = s.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        s.get(range)
            .ok_or_else(|| format!("Invalid hex color '#{}'", s))
            .and_then(|part| u8::from_str_radix(part, 16).map_err(|e| e.to_string()))
    };
    match s.len() {
        6 => Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color32::from_rgba_unmultiplied(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(format!(
            "Invalid hex color '#{}': expected 6 or 8 hex digits",
            s
        )),
    }
}

/// Format a colour as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// Serde helper for `Option<Color32>` stored as an optional hex string.
pub mod hex_color_opt {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Option<Color32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(c) => serializer.serialize_some(&super::to_hex(*c)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse_hex_color(s)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Serde helper for a required `Color32` stored as a hex string.
pub mod hex_color {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_hex_color(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_accepts_both_lengths() {
        assert_eq!(parse_hex_color("#60A5FA"), Ok(Color32::from_rgb(0x60, 0xA5, 0xFA)));
        assert_eq!(parse_hex_color("10b981"), Ok(Color32::from_rgb(0x10, 0xB9, 0x81)));
        let translucent = parse_hex_color("#000000FF").unwrap();
        assert_eq!(translucent, Color32::BLACK);
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_to_hex_is_uppercase() {
        assert_eq!(to_hex(Color32::from_rgb(0xef, 0x44, 0x44)), "#EF4444");
    }
}

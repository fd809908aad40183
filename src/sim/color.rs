//! Fixed color palette

use serde::{Deserialize, Serialize};

/// Every color the simulation can draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Cyan,
    Purple,
    Green,
    /// Playfield background (#333)
    Charcoal,
}

/// Ball colors, assigned round-robin by body index
pub const BALL_PALETTE: [Color; 5] = [
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Cyan,
    Color::Purple,
];

impl Color {
    /// Palette color for the body at `index`
    pub fn for_body(index: usize) -> Self {
        BALL_PALETTE[index % BALL_PALETTE.len()]
    }

    /// sRGB-encoded RGBA, the same values as the CSS color
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Color::Red => [1.0, 0.0, 0.0, 1.0],
            Color::Blue => [0.0, 0.0, 1.0, 1.0],
            Color::Yellow => [1.0, 1.0, 0.0, 1.0],
            Color::Cyan => [0.0, 1.0, 1.0, 1.0],
            // CSS purple is #800080
            Color::Purple => [0.502, 0.0, 0.502, 1.0],
            // CSS green is #008000
            Color::Green => [0.0, 0.502, 0.0, 1.0],
            Color::Charcoal => [0.2, 0.2, 0.2, 1.0],
        }
    }
}

/// Decode sRGB color channels to linear light for an sRGB render target.
/// Alpha passes through.
pub fn srgb_to_linear(rgba: [f32; 4]) -> [f32; 4] {
    let decode = |c: f32| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [decode(rgba[0]), decode(rgba[1]), decode(rgba[2]), rgba[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(Color::for_body(0), Color::Red);
        assert_eq!(Color::for_body(4), Color::Purple);
        assert_eq!(Color::for_body(5), Color::Red);
        assert_eq!(Color::for_body(7), Color::Yellow);
    }

    #[test]
    fn test_charcoal_linearizes_to_css_333() {
        let [r, g, b, a] = srgb_to_linear(Color::Charcoal.rgba());
        // #333 is 0.2 in sRGB, about 0.0331 in linear light
        assert!((r - 0.0331).abs() < 1e-4, "r = {r}");
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        let [r, g, b, a] = srgb_to_linear([0.0, 1.0, 0.02, 0.5]);
        assert_eq!(r, 0.0);
        assert!((g - 1.0).abs() < 1e-6);
        assert!((b - 0.02 / 12.92).abs() < 1e-7);
        assert_eq!(a, 0.5);
        // CSS purple keeps its hue but drops to about 0.216 per channel
        let purple = srgb_to_linear(Color::Purple.rgba());
        assert!((purple[0] - 0.2159).abs() < 1e-3);
        assert_eq!(purple[1], 0.0);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Color::Cyan).unwrap();
        assert_eq!(json, "\"cyan\"");
        let back: Color = serde_json::from_str("\"charcoal\"").unwrap();
        assert_eq!(back, Color::Charcoal);
    }
}

use egui::Color32;

/// One swatch of the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    hex: &'static str,
    color: Color32,
}

impl PaletteColor {
    /// Builds a swatch from a `#RRGGBB` literal. Malformed literals fail at compile time
    /// when used in a const context.
    pub const fn from_hex(hex: &'static str) -> Self {
        let bytes = hex.as_bytes();
        assert!(bytes.len() == 7 && bytes[0] == b'#', "expected #RRGGBB");
        let r = hex_digit(bytes[1]) * 16 + hex_digit(bytes[2]);
        let g = hex_digit(bytes[3]) * 16 + hex_digit(bytes[4]);
        let b = hex_digit(bytes[5]) * 16 + hex_digit(bytes[6]);
        Self {
            hex,
            color: Color32::from_rgb(r, g, b),
        }
    }

    /// Canonical `#RRGGBB` form, as shown in the status bar.
    pub fn hex(&self) -> &'static str {
        self.hex
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Default for PaletteColor {
    fn default() -> Self {
        PALETTE[0]
    }
}

impl std::fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex)
    }
}

const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

/// The 24 selectable colors in display order. `#FCA5A5` is listed twice on purpose;
/// both swatches stay so the grid keeps its shape.
pub const PALETTE: [PaletteColor; 24] = [
    PaletteColor::from_hex("#000000"),
    PaletteColor::from_hex("#374151"),
    PaletteColor::from_hex("#EF4444"),
    PaletteColor::from_hex("#F97316"),
    PaletteColor::from_hex("#EAB308"),
    PaletteColor::from_hex("#22C55E"),
    PaletteColor::from_hex("#06B6D4"),
    PaletteColor::from_hex("#3B82F6"),
    PaletteColor::from_hex("#8B5CF6"),
    PaletteColor::from_hex("#EC4899"),
    PaletteColor::from_hex("#F43F5E"),
    PaletteColor::from_hex("#84CC16"),
    PaletteColor::from_hex("#FFFFFF"),
    PaletteColor::from_hex("#9CA3AF"),
    PaletteColor::from_hex("#FCA5A5"),
    PaletteColor::from_hex("#FED7AA"),
    PaletteColor::from_hex("#FEF3C7"),
    PaletteColor::from_hex("#BBF7D0"),
    PaletteColor::from_hex("#A7F3D0"),
    PaletteColor::from_hex("#BFDBFE"),
    PaletteColor::from_hex("#C4B5FD"),
    PaletteColor::from_hex("#F9A8D4"),
    PaletteColor::from_hex("#FCA5A5"),
    PaletteColor::from_hex("#D9F99D"),
];

//! Hex color parsing and the luminance rules that keep accents legible.

/// Backgrounds brighter than this count as light.
pub const LIGHT_THRESHOLD: f64 = 200.0;
/// On a dark background, accents darker than this are forced to white.
pub const DARK_ACCENT_THRESHOLD: f64 = 55.0;

/// Accent used on light backgrounds when the chosen one is too pale.
pub const CLAMPED_DARK: &str = "#0f172a";
/// Accent used on dark backgrounds when the chosen one is too dark.
pub const CLAMPED_LIGHT: &str = "#FFFFFF";

pub const DEFAULT_ACCENT: &str = "#2563EB";
pub const DEFAULT_BACKGROUND: &str = "#F8FAFC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    /// Any alpha channel is ignored.
    pub fn parse(hex: &str) -> Option<Rgb> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits[..6].to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Perceived brightness on a 0-255 scale: `(299R + 587G + 114B) / 1000`.
    pub fn brightness(&self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn with_alpha(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Canonical `#rrggbb` form of `hex`, or `fallback` when it does not parse.
pub fn normalize_or(hex: &str, fallback: &str) -> String {
    Rgb::parse(hex)
        .or_else(|| Rgb::parse(fallback))
        .map(Rgb::to_hex)
        .unwrap_or_else(|| fallback.to_string())
}

pub fn is_light(background: &str) -> bool {
    Rgb::parse(background)
        .map(|rgb| rgb.brightness() > LIGHT_THRESHOLD)
        .unwrap_or(false)
}

/// Re-clamps `accent` so it stays readable against `background`.
pub fn effective_accent(accent: &str, background: &str) -> String {
    let accent = normalize_or(accent, DEFAULT_ACCENT);
    let brightness = Rgb::parse(&accent).map(|c| c.brightness()).unwrap_or(0.0);
    let light_bg = is_light(background);

    if light_bg && brightness > LIGHT_THRESHOLD {
        CLAMPED_DARK.to_string()
    } else if !light_bg && brightness < DARK_ACCENT_THRESHOLD {
        CLAMPED_LIGHT.to_string()
    } else {
        accent
    }
}

/// `rgba(...)` form of `hex` at `alpha`; returns `hex` unchanged when it does not parse.
pub fn with_alpha(hex: &str, alpha: f64) -> String {
    Rgb::parse(hex)
        .map(|c| c.with_alpha(alpha))
        .unwrap_or_else(|| hex.to_string())
}

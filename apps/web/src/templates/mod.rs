//! Template, accent color and display mode selection.

pub mod handlers;

use crate::models::portfolio::DisplayMode;
use crate::render::color::Rgb;
use crate::render::html::escape;

/// Preset accent colors offered next to the free hex input.
pub const SWATCHES: [(&str, &str); 5] = [
    ("Blue", "#2563EB"),
    ("Teal", "#0F766E"),
    ("Purple", "#7C3AED"),
    ("Red", "#EF4444"),
    ("Amber", "#F59E0B"),
];

pub const INVALID_COLOR: &str = "Please enter a valid hex color such as #2563EB.";

/// The accent picked in a form: a non-empty custom hex wins over the swatch.
/// Returns `#RRGGBB` in uppercase.
pub fn choose_color(swatch: Option<&str>, custom: Option<&str>) -> Result<String, &'static str> {
    let raw = custom
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .or_else(|| swatch.map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or(SWATCHES[0].1);
    Rgb::parse(raw)
        .map(|rgb| rgb.to_hex().to_ascii_uppercase())
        .ok_or(INVALID_COLOR)
}

/// Radio buttons for the swatches plus a free hex field.
pub fn color_picker(selected: &str) -> String {
    let selected_upper = selected.to_ascii_uppercase();
    let mut out = String::from(r#"<fieldset class="card"><legend>Accent color</legend><div style="display:flex;gap:12px;flex-wrap:wrap;">"#);
    for (name, hex) in SWATCHES {
        let checked = if selected_upper == hex { " checked" } else { "" };
        out.push_str(&format!(
            r#"<label style="display:flex;align-items:center;gap:6px;font-weight:500;"><input type="radio" name="color" value="{hex}"{checked}><span aria-hidden="true" style="width:20px;height:20px;border-radius:999px;background:{hex};display:inline-block;"></span>{name}</label>"#
        ));
    }
    let custom = if SWATCHES.iter().any(|(_, hex)| *hex == selected_upper) {
        String::new()
    } else {
        escape(selected)
    };
    out.push_str(&format!(
        r##"</div><label for="custom_color">Custom hex</label><input id="custom_color" type="text" name="custom_color" value="{custom}" placeholder="#1E293B"></fieldset>"##
    ));
    out
}

pub fn mode_picker(selected: DisplayMode) -> String {
    let mut out = String::from(r#"<fieldset class="card"><legend>Display mode</legend>"#);
    for (mode, label) in [(DisplayMode::Light, "Light"), (DisplayMode::Dark, "Dark")] {
        let checked = if mode == selected { " checked" } else { "" };
        out.push_str(&format!(
            r#"<label style="display:inline-flex;gap:6px;margin-right:16px;font-weight:500;"><input type="radio" name="mode" value="{}"{checked}>{label}</label>"#,
            mode.as_str()
        ));
    }
    out.push_str("</fieldset>");
    out
}

/// Parses a submitted mode, falling back to light.
pub fn parse_mode(mode: Option<&str>) -> DisplayMode {
    mode.and_then(|m| m.parse().ok()).unwrap_or_default()
}

//! Utility functions

use std::path::PathBuf;

// With stroke — for sidebar logo (large display)
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 160"><defs><style>.b{fill:#0f172a;stroke:#f472b6;stroke-width:6px}.w{fill:#ffc0cb}.m{fill:none;stroke:#f472b6;stroke-width:10px}</style></defs><rect class="b" x="18" y="30" width="76" height="112" rx="8"/><rect class="w" x="34" y="48" width="14" height="14"/><rect class="w" x="60" y="48" width="14" height="14"/><rect class="w" x="34" y="74" width="14" height="14"/><rect class="w" x="60" y="74" width="14" height="14"/><rect class="w" x="34" y="100" width="14" height="14"/><rect class="w" x="48" y="118" width="18" height="24"/><circle class="m" cx="108" cy="84" r="30"/><line class="m" x1="130" y1="106" x2="150" y2="126"/></svg>"##;

// No stroke variation, square-friendly — for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 160"><defs><style>.b{fill:#1e293b}.w{fill:#ffc0cb}.m{fill:none;stroke:#f472b6;stroke-width:12px}</style></defs><rect class="b" x="16" y="24" width="80" height="120" rx="10"/><rect class="w" x="32" y="44" width="16" height="16"/><rect class="w" x="62" y="44" width="16" height="16"/><rect class="w" x="32" y="72" width="16" height="16"/><rect class="w" x="62" y="72" width="16" height="16"/><rect class="w" x="46" y="112" width="20" height="32"/><circle class="m" cx="106" cy="86" r="32"/><line class="m" x1="130" y1="110" x2="152" y2="132"/></svg>"##;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_logo_square(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the application data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Hotel SEO Scanner")
}

/// Format an amount in whole NOK with thousands separators, e.g. "12 345 678 kr"
pub fn format_nok(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{} kr", grouped)
    } else {
        format!("{} kr", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nok_groups_thousands() {
        assert_eq!(format_nok(0), "0 kr");
        assert_eq!(format_nok(950), "950 kr");
        assert_eq!(format_nok(5_000_000), "5 000 000 kr");
        assert_eq!(format_nok(49_999_999), "49 999 999 kr");
    }

    #[test]
    fn nok_handles_negative() {
        assert_eq!(format_nok(-1_500), "-1 500 kr");
    }
}

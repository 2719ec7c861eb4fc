use eframe::egui::Color32;

/// Parses a `#rrggbb` string into an egui color. Anything else falls back
/// to gray so a bad hex never panics the paint pass.
pub fn hex_color(hex: &str) -> Color32 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Color32::GRAY;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(red), Ok(green), Ok(blue)) => Color32::from_rgb(red, green, blue),
        _ => Color32::GRAY,
    }
}

/// Shortens long case captions for on-canvas labels.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }

    let mut truncated = label
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(hex_color("#ed8035"), Color32::from_rgb(0xed, 0x80, 0x35));
        assert_eq!(hex_color("00ff00"), Color32::from_rgb(0, 255, 0));
    }

    #[test]
    fn malformed_hex_falls_back_to_gray() {
        assert_eq!(hex_color("#zzz"), Color32::GRAY);
        assert_eq!(hex_color(""), Color32::GRAY);
    }

    #[test]
    fn truncates_long_labels_with_ellipsis() {
        assert_eq!(truncate_label("Foisy v. Wyman", 30), "Foisy v. Wyman");
        let truncated = truncate_label("Stuart v. Coldwell Banker Commercial Group, Inc.", 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with('…'));
    }
}

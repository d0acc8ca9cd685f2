use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{SEASONS, calendar_rank};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Season → Color32
// ---------------------------------------------------------------------------

/// Maps season labels to distinct colours. Hues are handed out in calendar
/// order, so winter → autumn always read as a progression.
#[derive(Debug, Clone)]
pub struct SeasonPalette {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SeasonPalette {
    /// Build a palette for the given labels (duplicates are ignored).
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut all: Vec<&str> = labels.into_iter().collect();
        all.sort_by_key(|s| (calendar_rank(s), *s));
        all.dedup();

        let palette = generate_palette(all.len());
        let mapping = all
            .into_iter()
            .zip(palette)
            .map(|(label, c)| (label.to_string(), c))
            .collect();

        SeasonPalette {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, season: &str) -> Color32 {
        self.mapping
            .get(season)
            .copied()
            .unwrap_or(self.default_color)
    }
}

impl Default for SeasonPalette {
    fn default() -> Self {
        Self::new(SEASONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colours() {
        let colours = generate_palette(4);
        assert_eq!(colours.len(), 4);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn hues_follow_calendar_order() {
        let shuffled = SeasonPalette::new(["summer", "autumn", "winter", "spring", "summer"]);
        let plain = SeasonPalette::default();
        for season in SEASONS {
            assert_eq!(shuffled.color_for(season), plain.color_for(season));
        }
        assert_eq!(plain.color_for("winter"), generate_palette(4)[0]);
    }

    #[test]
    fn unknown_label_is_grey() {
        let palette = SeasonPalette::new(["spring"]);
        assert_eq!(palette.color_for("monsoon"), Color32::GRAY);
        assert_ne!(palette.color_for("spring"), Color32::GRAY);
    }
}

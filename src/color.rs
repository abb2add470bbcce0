use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| hsl_to_color32((i as f32 / n as f32) * 360.0, 0.75, 0.55))
        .collect()
}

/// Diverging blue–white–red scale for a coefficient in `[-1, 1]`.
pub fn diverging(value: f64) -> Color32 {
    let t = value.clamp(-1.0, 1.0) as f32;
    let hue = if t < 0.0 { 220.0 } else { 5.0 };
    let lightness = 0.92 - 0.47 * t.abs();
    hsl_to_color32(hue, 0.7, lightness)
}

// ---------------------------------------------------------------------------
// Species → Color32
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SpeciesColors {
    mapping: BTreeMap<Species, Color32>,
    default_color: Color32,
}

impl SpeciesColors {
    pub fn new(species: &[Species]) -> Self {
        let mapping = species
            .iter()
            .copied()
            .zip(generate_palette(species.len()))
            .collect();
        SpeciesColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping
            .get(&species)
            .copied()
            .unwrap_or(self.default_color)
    }
}

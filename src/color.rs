use std::fmt::Display;

use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Fixed colours for single-series charts
// ---------------------------------------------------------------------------

/// Measured data.
pub const DATA: RGBColor = RGBColor(31, 90, 200);
/// Theoretical / ideal reference lines.
pub const REFERENCE: RGBColor = RGBColor(214, 39, 40);
/// Efficiency curve.
pub const EFFICIENCY: RGBColor = RGBColor(44, 160, 44);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: series key → RGBColor
// ---------------------------------------------------------------------------

/// Assigns each series key its own colour, in the order the keys are given.
#[derive(Debug, Clone)]
pub struct ColorMap<K> {
    entries: Vec<(K, RGBColor)>,
}

impl<K: PartialEq + Clone + Display> ColorMap<K> {
    /// Build a colour map over the given keys. Repeated keys keep their
    /// first colour.
    pub fn new<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut distinct: Vec<K> = Vec::new();
        for key in keys {
            if !distinct.contains(key) {
                distinct.push(key.clone());
            }
        }
        let palette = generate_palette(distinct.len());
        ColorMap {
            entries: distinct.into_iter().zip(palette).collect(),
        }
    }

    /// Legend entries (key label → colour), in key order.
    pub fn legend_entries(&self) -> Vec<(String, RGBColor)> {
        self.entries
            .iter()
            .map(|(k, c)| (k.to_string(), *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
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
    fn color_map_keeps_given_order() {
        let keys = ["4", "1", "2", "1"].map(String::from);
        let map = ColorMap::new(keys.iter());
        let legend = map.legend_entries();
        let labels: Vec<&str> = legend.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["4", "1", "2"]);
        assert_eq!(legend[0].1, generate_palette(3)[0]);
    }
}

//! Ruler layout engine.
//!
//! Turns a [`RulerConfig`] into the ordered list of tick marks both renderers
//! draw. The computation is a pure function of the config: no caching, no
//! hidden state, and the same input always yields an identical layout.
//!
//! Note that centimeter and inch rulers scale their length by the strip
//! *width* (`total = width_px * length`), while millimeter rulers use the
//! nominal `PX_PER_CM`. Output depends on this, so it is kept as is.

pub mod constants;

use log::debug;
use serde::Serialize;

use crate::models::{
    HeightClass, NameLabel, RulerConfig, TextAnchor, TickLabel, TickMark, Unit,
};
use constants::*;

/// Page orientation used when the layout is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// Result of laying out a ruler: the ticks plus the drawing bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulerLayout {
    pub unit: Unit,
    pub main_divisions: u32,
    pub total_divisions: u32,
    pub total_length_px: f64,
    pub width_px: f64,
    /// Ticks in increasing index order, which is also the draw order.
    pub ticks: Vec<TickMark>,
}

impl RulerLayout {
    /// Landscape when the ruler is longer than it is wide.
    pub fn orientation(&self) -> Orientation {
        if self.total_length_px > self.width_px {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Placement of the custom name, or `None` for an empty name.
    pub fn name_label(&self, name: &str) -> Option<NameLabel> {
        if name.is_empty() {
            return None;
        }
        Some(NameLabel {
            text: name.to_string(),
            x: self.total_length_px / 2.0,
            y: self.width_px * NAME_BASELINE_FACTOR,
            font_size: self.width_px / NAME_FONT_DIVISOR,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &TickLabel> {
        self.ticks.iter().filter_map(|tick| tick.label.as_ref())
    }
}

pub fn cm_to_px(cm: f64) -> f64 {
    cm * PX_PER_CM
}

/// Minor subdivisions per labeled unit.
pub fn main_divisions(unit: Unit) -> u32 {
    match unit {
        Unit::Inch => INCH_MAIN_DIVISIONS,
        Unit::Centimeter | Unit::Millimeter => METRIC_MAIN_DIVISIONS,
    }
}

/// Number of graduation steps along the whole ruler.
pub fn total_divisions(unit: Unit, length: u32) -> u32 {
    match unit {
        Unit::Millimeter => length,
        Unit::Centimeter | Unit::Inch => length * main_divisions(unit),
    }
}

/// Strip width in px.
pub fn width_px(config: &RulerConfig) -> f64 {
    cm_to_px(f64::from(config.width_cm.centimeters()))
}

/// Ruler length in px.
pub fn total_length_px(config: &RulerConfig) -> f64 {
    match config.unit {
        Unit::Millimeter => cm_to_px(f64::from(config.length) / 10.0),
        Unit::Centimeter | Unit::Inch => width_px(config) * f64::from(config.length),
    }
}

fn height_class(unit: Unit, index: u32, main_divisions: u32) -> HeightClass {
    match unit {
        Unit::Millimeter if index % MM_MAJOR_EVERY == 0 => HeightClass::Major,
        Unit::Millimeter => HeightClass::Minor,
        _ if index % main_divisions == 0 => HeightClass::Major,
        _ if index % (main_divisions / 2) == 0 => HeightClass::Medium,
        _ => HeightClass::Minor,
    }
}

fn tick_height(class: HeightClass, width_px: f64) -> f64 {
    match class {
        HeightClass::Major => width_px / MAJOR_HEIGHT_DIVISOR,
        HeightClass::Medium => width_px / MEDIUM_HEIGHT_DIVISOR,
        HeightClass::Minor => width_px / MINOR_HEIGHT_DIVISOR,
    }
}

fn stroke_width(unit: Unit, class: HeightClass) -> f64 {
    match (unit, class) {
        (Unit::Millimeter, HeightClass::Minor) => MM_MINOR_STROKE_WIDTH,
        _ => DEFAULT_STROKE_WIDTH,
    }
}

fn label_for(
    unit: Unit,
    index: u32,
    position: f64,
    dims: (u32, u32, f64),
) -> TickLabel {
    let (main_divisions, total_divisions, width_px) = dims;
    // Centimeter labels count whole centimeters; mm and inch print the raw index.
    let text = match unit {
        Unit::Centimeter => (index / main_divisions).to_string(),
        Unit::Millimeter | Unit::Inch => index.to_string(),
    };
    let (x, anchor) = if index == total_divisions {
        (position - LABEL_OFFSET_END, TextAnchor::End)
    } else {
        (position + LABEL_OFFSET_START, TextAnchor::Start)
    };
    let font_size = match unit {
        Unit::Millimeter => width_px / MM_LABEL_FONT_DIVISOR,
        Unit::Centimeter | Unit::Inch => width_px / LABEL_FONT_DIVISOR,
    };
    TickLabel {
        text,
        x,
        y: width_px / LABEL_BASELINE_DIVISOR,
        anchor,
        font_size,
    }
}

/// Computes every tick mark of the ruler described by `config`.
///
/// Positions are compared against the total length with plain `f64` `<=`,
/// so the final tick can be dropped when `i * step` rounds past the end.
pub fn compute_ticks(config: &RulerConfig) -> RulerLayout {
    let unit = config.unit;
    let width_px = width_px(config);
    let main_divisions = main_divisions(unit);
    let total_divisions = total_divisions(unit, config.length);
    let total_length_px = total_length_px(config);
    let step = total_length_px / f64::from(total_divisions);

    let mut ticks = Vec::with_capacity(total_divisions as usize + 1);
    for index in 0..=total_divisions {
        let position = f64::from(index) * step;
        if position > total_length_px {
            continue;
        }
        let class = height_class(unit, index, main_divisions);
        let label = (class == HeightClass::Major).then(|| {
            label_for(
                unit,
                index,
                position,
                (main_divisions, total_divisions, width_px),
            )
        });
        ticks.push(TickMark {
            index,
            position_px: position,
            height_class: class,
            height_px: tick_height(class, width_px),
            stroke_width: stroke_width(unit, class),
            label,
        });
    }

    debug!(
        "[compute_ticks] unit={} length={} width={}cm -> {} ticks over {}px x {}px",
        unit,
        config.length,
        config.width_cm.centimeters(),
        ticks.len(),
        total_length_px,
        width_px
    );

    RulerLayout {
        unit,
        main_divisions,
        total_divisions,
        total_length_px,
        width_px,
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RulerWidth;

    const EPS: f64 = 1e-9;

    fn config(unit: Unit, length: u32, width: RulerWidth) -> RulerConfig {
        RulerConfig::new(unit, length, width, "")
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_centimeter_30_by_2() {
        let layout = compute_ticks(&config(Unit::Centimeter, 30, RulerWidth::TwoCm));
        assert_close(layout.width_px, 75.5905511812);
        assert_close(layout.total_length_px, 75.5905511812 * 30.0);
        assert_eq!(layout.main_divisions, 10);
        assert_eq!(layout.total_divisions, 300);
        assert!(layout.ticks.len() == 300 || layout.ticks.len() == 301);

        let tick = &layout.ticks[10];
        assert_eq!(tick.index, 10);
        assert_eq!(tick.height_class, HeightClass::Major);
        assert_close(tick.height_px, layout.width_px / 3.0);
        let label = tick.label.as_ref().expect("major tick is labeled");
        assert_eq!(label.text, "1");
        assert_eq!(label.anchor, TextAnchor::Start);
        assert_close(label.x, tick.position_px + 2.0);
        assert_close(label.y, layout.width_px / 2.5);
        assert_close(label.font_size, layout.width_px / 10.0);

        assert_eq!(layout.ticks[5].height_class, HeightClass::Medium);
        assert_close(layout.ticks[5].height_px, layout.width_px / 4.0);
        assert_eq!(layout.ticks[3].height_class, HeightClass::Minor);
        assert_close(layout.ticks[3].height_px, layout.width_px / 6.0);
        assert!(layout.ticks[3].label.is_none());
        assert!(layout.ticks[5].label.is_none());
    }

    #[test]
    fn test_millimeter_50_by_2() {
        let layout = compute_ticks(&config(Unit::Millimeter, 50, RulerWidth::TwoCm));
        assert_close(layout.total_length_px, 5.0 * PX_PER_CM);
        assert_eq!(layout.total_divisions, 50);
        assert!(layout.ticks.len() == 50 || layout.ticks.len() == 51);

        for tick in &layout.ticks {
            if tick.index % 5 == 0 {
                assert_eq!(tick.height_class, HeightClass::Major);
                assert_eq!(tick.stroke_width, 1.0);
                let label = tick.label.as_ref().expect("major tick is labeled");
                assert_eq!(label.text, tick.index.to_string());
                assert_close(label.font_size, layout.width_px / 12.0);
            } else {
                assert_eq!(tick.height_class, HeightClass::Minor);
                assert_eq!(tick.stroke_width, 0.5);
                assert!(tick.label.is_none());
            }
        }
        assert!(layout
            .ticks
            .iter()
            .all(|tick| tick.height_class != HeightClass::Medium));
    }

    #[test]
    fn test_inch_12_by_3() {
        let layout = compute_ticks(&config(Unit::Inch, 12, RulerWidth::ThreeCm));
        assert_eq!(layout.main_divisions, 16);
        assert_close(layout.width_px, 113.3858267718);
        assert_close(layout.total_length_px, layout.width_px * 12.0);
        assert_eq!(layout.total_divisions, 192);

        let labels: Vec<&str> = layout
            .ticks
            .iter()
            .filter_map(|tick| tick.label.as_ref().map(|l| l.text.as_str()))
            .take(3)
            .collect();
        assert_eq!(labels, vec!["0", "16", "32"]);
        assert_eq!(layout.ticks[8].height_class, HeightClass::Medium);
        assert_eq!(layout.ticks[4].height_class, HeightClass::Minor);
        assert!(layout.ticks.iter().all(|tick| tick.stroke_width == 1.0));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let cfg = config(Unit::Inch, 7, RulerWidth::FourCm);
        assert_eq!(compute_ticks(&cfg), compute_ticks(&cfg));
    }

    #[test]
    fn test_ticks_bounded_and_ordered_for_every_config() {
        for unit in Unit::ALL {
            for width in RulerWidth::ALL {
                for length in 1..=100 {
                    let layout = compute_ticks(&config(unit, length, width));
                    assert!(layout.ticks.len() <= layout.total_divisions as usize + 1);
                    assert!(layout.ticks.len() >= layout.total_divisions as usize);

                    let mut previous = 0.0;
                    for (expected_index, tick) in layout.ticks.iter().enumerate() {
                        assert_eq!(tick.index as usize, expected_index);
                        assert!(tick.position_px >= 0.0);
                        assert!(tick.position_px <= layout.total_length_px);
                        assert!(tick.position_px >= previous);
                        previous = tick.position_px;
                        assert_eq!(tick.label.is_some(), tick.is_major());
                    }
                }
            }
        }
    }

    #[test]
    fn test_last_tick_label_is_right_aligned() {
        for unit in Unit::ALL {
            for width in RulerWidth::ALL {
                for length in 1..=100 {
                    let layout = compute_ticks(&config(unit, length, width));
                    for tick in &layout.ticks {
                        let Some(label) = &tick.label else { continue };
                        if tick.index == layout.total_divisions {
                            assert_eq!(label.anchor, TextAnchor::End);
                            assert_close(label.x, tick.position_px - 4.0);
                        } else {
                            assert_eq!(label.anchor, TextAnchor::Start);
                            assert_close(label.x, tick.position_px + 2.0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_first_tick_at_origin() {
        let layout = compute_ticks(&config(Unit::Centimeter, 1, RulerWidth::TwoCm));
        let first = &layout.ticks[0];
        assert_eq!(first.position_px, 0.0);
        assert_eq!(first.label.as_ref().map(|l| l.text.as_str()), Some("0"));
    }

    #[test]
    fn test_orientation_and_name_label() {
        let long = compute_ticks(&config(Unit::Centimeter, 30, RulerWidth::TwoCm));
        assert_eq!(long.orientation(), Orientation::Landscape);

        // 1 mm on a 4 cm strip is taller than it is long.
        let short = compute_ticks(&config(Unit::Millimeter, 1, RulerWidth::FourCm));
        assert_eq!(short.orientation(), Orientation::Portrait);

        assert!(long.name_label("").is_none());
        let name = long.name_label("Desk").expect("non-empty name");
        assert_close(name.x, long.total_length_px / 2.0);
        assert_close(name.y, long.width_px * 0.75);
        assert_close(name.font_size, long.width_px / 6.0);
    }
}

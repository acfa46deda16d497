use crate::binner::Slot;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A horizontal axis mapping scores onto scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberLine {
    pub min: f64,
    pub max: f64,
    pub length: f64,
    pub center: (f64, f64),
}

impl NumberLine {
    pub fn new(min: f64, max: f64, length: f64, center: (f64, f64)) -> Self {
        Self {
            min,
            max,
            length,
            center,
        }
    }

    /// Linear map of `[min, max]` onto the axis span. Values outside the
    /// range extrapolate along the same line.
    pub fn number_to_point(&self, value: f64) -> (f64, f64) {
        let span = self.max - self.min;
        let t = if span == 0.0 {
            0.5
        } else {
            (value - self.min) / span
        };
        let left = self.center.0 - self.length / 2.0;
        (left + t * self.length, self.center.1)
    }

    pub fn baseline(&self) -> f64 {
        self.center.1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotStyle {
    pub radius: f64,
    /// Gap between the axis and the bottom dot of every column.
    pub padding: f64,
}

impl DotStyle {
    /// Vertical distance between two stacked dots.
    pub fn slot_height(&self) -> f64 {
        2.0 * self.radius
    }
}

/// The two scales the deck draws the same sample at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ViewScale {
    /// Large histogram the dots fall into.
    Full,
    /// Smaller re-draw used for the "rare in the boring world" slide.
    Callback,
}

impl ViewScale {
    pub fn axis(&self, trials: u32) -> NumberLine {
        let max = trials as f64;
        match self {
            Self::Full => NumberLine::new(0.0, max, 9.5, (0.0, -3.2)),
            Self::Callback => NumberLine::new(0.0, max, 7.5, (0.0, -1.8)),
        }
    }

    pub fn dot_style(&self) -> DotStyle {
        match self {
            Self::Full => DotStyle {
                radius: 0.12,
                padding: 0.05,
            },
            Self::Callback => DotStyle {
                radius: 0.10,
                padding: 0.04,
            },
        }
    }
}

/// One marker as handed to the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedDot {
    pub guesser: usize,
    pub outcome: u32,
    pub stack: usize,
    pub x: f64,
    pub y: f64,
    pub in_tail: bool,
}

/// Centre of the dot sitting at `stack` in the column for `bucket`.
pub fn slot_position(axis: &NumberLine, style: &DotStyle, bucket: u32, stack: usize) -> (f64, f64) {
    let (x, _) = axis.number_to_point(bucket as f64);
    let y = axis.baseline() + style.radius * (2.0 * stack as f64 + 1.0) + style.padding;
    (x, y)
}

/// Top edge of a column holding `count` dots.
pub fn column_top(axis: &NumberLine, style: &DotStyle, count: usize) -> f64 {
    axis.baseline() + style.slot_height() * count as f64 + style.padding
}

pub fn layout_dots(
    slots: &[Slot],
    axis: &NumberLine,
    style: &DotStyle,
    tail_threshold: u32,
) -> Vec<PlacedDot> {
    slots
        .iter()
        .map(|slot| {
            let (x, y) = slot_position(axis, style, slot.bucket, slot.stack);
            PlacedDot {
                guesser: slot.guesser,
                outcome: slot.bucket,
                stack: slot.stack,
                x,
                y,
                in_tail: slot.bucket >= tail_threshold,
            }
        })
        .collect()
}

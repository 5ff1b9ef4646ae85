// Curve and clip types produced from sidecar keyframe tracks

use serde::{Deserialize, Serialize};

use super::interpolation::interpolate;
use crate::model::Interpolation;

/// Single key on a curve, time in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

/// Uninterrupted run of keys built from one keyframe group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub keys: Vec<Keyframe>,
}

impl CurveSegment {
    pub fn start(&self) -> Option<f32> {
        self.keys.first().map(|k| k.time)
    }

    pub fn end(&self) -> Option<f32> {
        self.keys.last().map(|k| k.time)
    }

    fn evaluate(&self, mode: Interpolation, time: f32) -> Option<f32> {
        let first = self.keys.first()?;
        if time <= first.time {
            return Some(first.value);
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if time < b.time {
                let span = b.time - a.time;
                let t = if span > 0.0 { (time - a.time) / span } else { 0.0 };
                return Some(interpolate(mode, a.value, b.value, t));
            }
        }

        self.keys.last().map(|k| k.value)
    }
}

/// One animated scalar property.
///
/// Segments never interpolate into each other: between two segments the
/// curve holds the last value of the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationCurve {
    pub property: String,
    pub interpolation: Interpolation,
    pub segments: Vec<CurveSegment>,
}

impl AnimationCurve {
    pub fn new(property: impl Into<String>, interpolation: Interpolation) -> Self {
        Self {
            property: property.into(),
            interpolation,
            segments: Vec::new(),
        }
    }

    /// Total number of keys across all segments
    pub fn sample_count(&self) -> usize {
        self.segments.iter().map(|s| s.keys.len()).sum()
    }

    pub fn duration(&self) -> f32 {
        self.segments
            .iter()
            .filter_map(CurveSegment::end)
            .fold(0.0, f32::max)
    }

    /// Value at `time` seconds, `None` for a curve without keys
    pub fn evaluate(&self, time: f32) -> Option<f32> {
        let active = self
            .segments
            .iter()
            .filter(|s| s.start().is_some_and(|start| start <= time))
            .last()
            .or_else(|| self.segments.iter().find(|s| !s.keys.is_empty()))?;

        active.evaluate(self.interpolation, time)
    }
}

/// Clip asset for one texture transform entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    pub global_sequence: u32,
    pub length: f32,
    pub curves: Vec<AnimationCurve>,
}

impl AnimationClip {
    pub fn curve(&self, property: &str) -> Option<&AnimationCurve> {
        self.curves.iter().find(|c| c.property == property)
    }
}

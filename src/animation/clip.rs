// Texture transform tracks to animation clips

use super::types::{AnimationClip, AnimationCurve, CurveSegment, Keyframe};
use crate::error::ImportError;
use crate::model::{MultiValueTrack, TextureTransform};

const XYZ: [&str; 3] = ["x", "y", "z"];
const XYZW: [&str; 4] = ["x", "y", "z", "w"];

/// Sidecar timestamps are milliseconds
const MS_PER_SECOND: f32 = 1000.0;

/// Build the clip for texture transform `index`.
///
/// Every keyframe group of a track becomes its own curve segment per axis.
/// Tracks without keyframes are left out of the clip.
pub fn create_animation_clip(
    index: usize,
    name: &str,
    transform: &TextureTransform,
) -> Result<AnimationClip, ImportError> {
    let tracks: [(&str, &MultiValueTrack, &[&str]); 3] = [
        ("translation", &transform.translation, &XYZ),
        ("rotation", &transform.rotation, &XYZW),
        ("scaling", &transform.scaling, &XYZ),
    ];

    let mut clip = AnimationClip {
        name: name.to_string(),
        global_sequence: transform.translation.global_seq,
        ..Default::default()
    };

    for (track_name, track, axes) in tracks {
        if !track.has_keyframes() {
            continue;
        }
        validate_track(index, track_name, track, axes.len())?;
        let interpolation = track.interpolation();

        for (axis_index, axis) in axes.iter().enumerate() {
            let mut curve = AnimationCurve::new(format!("{}.{}", track_name, axis), interpolation);

            for (timestamps, values) in track.timestamps.iter().zip(&track.values) {
                if timestamps.is_empty() {
                    continue;
                }
                let keys = timestamps
                    .iter()
                    .zip(values)
                    .map(|(&time, value)| Keyframe {
                        time: time as f32 / MS_PER_SECOND,
                        value: value[axis_index],
                    })
                    .collect();
                curve.segments.push(CurveSegment { keys });
            }

            clip.length = clip.length.max(curve.duration());
            clip.curves.push(curve);
        }
    }

    Ok(clip)
}

fn validate_track(
    index: usize,
    track_name: &str,
    track: &MultiValueTrack,
    components: usize,
) -> Result<(), ImportError> {
    if track.timestamps.len() != track.values.len() {
        return Err(ImportError::animation(
            index,
            format!(
                "{} has {} timestamp groups but {} value groups",
                track_name,
                track.timestamps.len(),
                track.values.len()
            ),
        ));
    }

    for (group, (timestamps, values)) in track.timestamps.iter().zip(&track.values).enumerate() {
        if timestamps.len() != values.len() {
            return Err(ImportError::animation(
                index,
                format!(
                    "{} group {} has {} timestamps but {} values",
                    track_name,
                    group,
                    timestamps.len(),
                    values.len()
                ),
            ));
        }
        if let Some(short) = values.iter().find(|v| v.len() < components) {
            return Err(ImportError::animation(
                index,
                format!(
                    "{} group {} has a {}-component value, expected {}",
                    track_name,
                    group,
                    short.len(),
                    components
                ),
            ));
        }
    }

    Ok(())
}

mod animation;
mod skin;
mod texture;
pub mod model;

pub use animation::*;
pub use model::M2;
pub use skin::*;
pub use texture::*;

// Re-export material types from the material module
pub use crate::material::{BlendMode, Material, MaterialFlags};

#[cfg(test)]
mod tests {
    use super::*;

    const SIDECAR: &str = r#"{
        "fileDataID": 123456,
        "fileName": "world/goober/g_crystal.m2",
        "internalName": "G_Crystal",
        "skin": {
            "subMeshes": [{ "enabled": true }, { "enabled": false }],
            "textureUnits": [{ "skinSelectionIndex": 0, "geosetIndex": 1, "colorIndex": 0 }]
        },
        "textures": [
            { "fileNameInternal": null, "fileNameExternal": "crystal.png", "mtlName": "tex_00", "flag": 3, "fileDataID": 99 }
        ],
        "textureTypes": [0],
        "materials": [{ "flags": 4, "blendingMode": 4 }],
        "textureCombos": [0],
        "colors": [{
            "color": { "globalSeq": 0, "interpolation": 1, "timestamps": [[0]], "values": [[[0.5, 0.25, 1.0]]] },
            "alpha": { "globalSeq": 0, "interpolation": 1, "timestamps": [[0]], "values": [[1.0]] }
        }],
        "textureTransforms": [],
        "textureTransformsLookup": [65535],
        "somethingNew": true
    }"#;

    #[test]
    fn test_parse_sidecar() {
        let m2: M2 = serde_json::from_str(SIDECAR).unwrap();
        assert_eq!(m2.file_data_id, 123456);
        assert_eq!(m2.internal_name, "G_Crystal");
        assert_eq!(m2.textures[0].mtl_name.as_deref(), Some("tex_00"));
        assert_eq!(m2.textures[0].file_name_internal, None);
        assert_eq!(m2.materials[0].blend_mode(), BlendMode::Add);
        assert!(m2.materials[0].flags().contains(MaterialFlags::TWO_SIDED));
        let skin = m2.skin.as_ref().unwrap();
        assert!(skin.sub_meshes[0].enabled);
        assert_eq!(skin.unit_for_geoset(1).map(|u| u.color_index), Some(0));
        assert_eq!(m2.colors[0].first_rgb(), Some([0.5, 0.25, 1.0]));
        assert_eq!(m2.texture_transforms_lookup, vec![65535]);
    }

    #[test]
    fn test_missing_fields_default() {
        let m2: M2 = serde_json::from_str(r#"{ "fileName": "a.m2" }"#).unwrap();
        assert!(m2.skin.is_none());
        assert!(m2.textures.is_empty());
        assert!(m2.materials.is_empty());
        assert!(m2.texture_transforms.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let m2: M2 = serde_json::from_str(SIDECAR).unwrap();
        let text = serde_json::to_string(&m2).unwrap();
        let back: M2 = serde_json::from_str(&text).unwrap();
        assert_eq!(m2, back);
    }

    #[test]
    fn test_track_keyframe_counts() {
        let track = MultiValueTrack {
            timestamps: vec![vec![0, 10], vec![], vec![20]],
            values: vec![vec![vec![0.0; 3]; 2], vec![], vec![vec![1.0; 3]]],
            ..Default::default()
        };
        assert!(track.has_keyframes());
        assert_eq!(track.keyframe_count(), 3);
        assert!(!MultiValueTrack::default().has_keyframes());
        let empty_groups = MultiValueTrack {
            timestamps: vec![vec![]],
            values: vec![vec![]],
            ..Default::default()
        };
        assert!(!empty_groups.has_keyframes());
    }

    #[test]
    fn test_first_rgb_requires_three_components() {
        let color = ColorData {
            color: MultiValueTrack {
                timestamps: vec![vec![0]],
                values: vec![vec![vec![0.1, 0.2]]],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(color.first_rgb(), None);
        assert_eq!(ColorData::default().first_rgb(), None);
    }
}

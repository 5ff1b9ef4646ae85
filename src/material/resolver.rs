use nalgebra_glm as glm;

use super::ResolvedMaterial;
use crate::model::M2;

/// Find the flags and blend mode for an imported material.
///
/// Textures and materials are parallel lists in the sidecar, but exporters
/// sometimes write fewer materials than textures. The texture position is
/// clamped to the last material in that case, and a material without any
/// matching texture gets the default (no flags, opaque).
pub fn resolve(material_name: &str, metadata: &M2) -> ResolvedMaterial {
    let Some(index) = metadata.texture_index_for(material_name) else {
        return ResolvedMaterial::default();
    };

    let Some(last) = metadata.materials.len().checked_sub(1) else {
        return ResolvedMaterial::default();
    };

    metadata.materials[index.min(last)].resolve()
}

/// Base color for a material, taken from the color track of the texture unit
/// drawing the material's geoset. Opaque white whenever the chain breaks.
pub fn resolve_base_color(material_name: &str, metadata: &M2) -> glm::Vec4 {
    let white = glm::vec4(1.0, 1.0, 1.0, 1.0);

    let Some(skin) = metadata.skin.as_ref().filter(|s| !s.texture_units.is_empty()) else {
        return white;
    };

    // An unmatched material looks up the geoset one past the last texture
    let geoset = metadata
        .texture_index_for(material_name)
        .unwrap_or(metadata.textures.len());

    let Some(unit) = skin.unit_for_geoset(geoset) else {
        return white;
    };

    match metadata
        .colors
        .get(unit.color_index as usize)
        .and_then(|color| color.first_rgb())
    {
        Some([r, g, b]) => glm::vec4(r, g, b, 1.0),
        None => white,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{BlendMode, Material, MaterialFlags};
    use crate::model::{ColorData, MultiValueTrack, Skin, Texture, TextureUnit};

    fn texture(mtl: &str) -> Texture {
        Texture {
            mtl_name: Some(mtl.to_string()),
            ..Default::default()
        }
    }

    fn material(flags: i16, blending_mode: u32) -> Material {
        Material {
            flags,
            blending_mode,
        }
    }

    #[test]
    fn test_resolve_matching_texture() {
        let metadata = M2 {
            textures: vec![texture("skin")],
            materials: vec![material(0, 2)],
            ..Default::default()
        };
        let resolved = resolve("skin", &metadata);
        assert_eq!(resolved.flags, MaterialFlags::NONE);
        assert_eq!(resolved.blend_mode, BlendMode::Alpha);
    }

    #[test]
    fn test_resolve_empty_textures_is_default() {
        let metadata = M2 {
            materials: vec![material(1, 4)],
            ..Default::default()
        };
        assert_eq!(resolve("anything", &metadata), ResolvedMaterial::default());
        assert_eq!(resolve("anything", &metadata).blend_mode, BlendMode::Opaque);
    }

    #[test]
    fn test_resolve_clamps_to_last_material() {
        let metadata = M2 {
            textures: vec![
                texture("a"),
                texture("b"),
                texture("c"),
                texture("d"),
                texture("e"),
            ],
            materials: vec![material(0, 0), material(0, 1), material(4, 4)],
            ..Default::default()
        };
        let resolved = resolve("e", &metadata);
        assert_eq!(resolved.blend_mode, BlendMode::Add);
        assert!(resolved.flags.contains(MaterialFlags::TWO_SIDED));
        assert_eq!(resolve("b", &metadata).blend_mode, BlendMode::AlphaKey);
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let metadata = M2 {
            textures: vec![texture("x"), texture("x")],
            materials: vec![material(0, 1), material(0, 2)],
            ..Default::default()
        };
        assert_eq!(resolve("x", &metadata).blend_mode, BlendMode::AlphaKey);
    }

    #[test]
    fn test_resolve_without_materials_is_default() {
        let metadata = M2 {
            textures: vec![texture("x")],
            ..Default::default()
        };
        assert_eq!(resolve("x", &metadata), ResolvedMaterial::default());
    }

    fn colored_metadata(geoset_index: u32, color_index: u32) -> M2 {
        M2 {
            skin: Some(Skin {
                texture_units: vec![TextureUnit {
                    skin_selection_index: 0,
                    geoset_index,
                    color_index,
                }],
                ..Default::default()
            }),
            textures: vec![texture("body"), texture("glow")],
            colors: vec![ColorData {
                color: MultiValueTrack {
                    timestamps: vec![vec![0, 100]],
                    values: vec![vec![vec![0.2, 0.4, 0.6], vec![1.0, 1.0, 1.0]]],
                    ..Default::default()
                },
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_base_color_from_first_sample() {
        let metadata = colored_metadata(1, 0);
        assert_eq!(resolve_base_color("glow", &metadata), glm::vec4(0.2, 0.4, 0.6, 1.0));
        assert_eq!(resolve_base_color("body", &metadata), glm::vec4(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_base_color_unmatched_material_uses_next_geoset() {
        let metadata = colored_metadata(2, 0);
        assert_eq!(resolve_base_color("missing", &metadata), glm::vec4(0.2, 0.4, 0.6, 1.0));
    }

    #[test]
    fn test_base_color_defaults_to_white() {
        let out_of_range = colored_metadata(1, 5);
        assert_eq!(resolve_base_color("glow", &out_of_range), glm::vec4(1.0, 1.0, 1.0, 1.0));

        let no_skin = M2 {
            skin: None,
            ..colored_metadata(1, 0)
        };
        assert_eq!(resolve_base_color("glow", &no_skin), glm::vec4(1.0, 1.0, 1.0, 1.0));
    }
}

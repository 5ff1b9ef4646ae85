use nalgebra_glm as glm;

use crate::material::{
    BlendMode, MaterialAsset, MaterialFlags, ResolvedMaterial, resolve, resolve_base_color,
};
use crate::model::M2;
use crate::store::ImportedMaterial;

pub const LIT_SHADER: &str = "Universal Render Pipeline/Simple Lit";
pub const UNLIT_SHADER: &str = "Universal Render Pipeline/Unlit";

/// Render queue index of the transparent geometry pass
pub const RENDER_QUEUE_TRANSPARENT: i32 = 3000;

/// Generic model material for the Universal Render Pipeline
pub fn configure_urp_material(imported: &ImportedMaterial, metadata: &M2) -> MaterialAsset {
    let resolved = resolve(&imported.name, metadata);
    let color = if metadata.colors.is_empty() {
        glm::vec4(1.0, 1.0, 1.0, 1.0)
    } else {
        resolve_base_color(&imported.name, metadata)
    };

    let mut material = MaterialAsset::new(&imported.name, LIT_SHADER);
    material.set_color("_BaseColor", color);

    if let Some(texture) = &imported.diffuse_texture {
        material.set_texture("_MainTex", texture);
    }

    apply_material_flags(&mut material, resolved);
    material
}

/// Flags first, then the blend mode. A later rule overwrites any property an
/// earlier one set.
pub fn apply_material_flags(material: &mut MaterialAsset, resolved: ResolvedMaterial) {
    if resolved.flags.contains(MaterialFlags::UNLIT) {
        material.shader = UNLIT_SHADER.to_string();
    }

    if resolved.flags.contains(MaterialFlags::TWO_SIDED) {
        material.double_sided_gi = true;
        material.set_float("_Cull", 0.0);
    }

    match resolved.blend_mode {
        BlendMode::AlphaKey => {
            material.enable_keyword("_ALPHATEST_ON");
            material.set_float("_AlphaClip", 1.0);
        }
        BlendMode::Alpha => {
            material.set_override_tag("RenderType", "Transparent");
            material.set_float("_Blend", 0.0);
            material.set_float("_Surface", 1.0);
            material.set_float("_ZWrite", 0.0);
        }
        BlendMode::Add => {
            material.set_override_tag("RenderType", "Transparent");
            material.disable_keyword("_ALPHAPREMULTIPLY_ON");
            material.render_queue = Some(RENDER_QUEUE_TRANSPARENT);
            material.set_float("_Cutoff", 0.0);
            material.set_float("_Blend", 1.0);
            material.set_float("_Surface", 1.0);
            material.set_float("_SrcBlend", 1.0);
            material.set_float("_DstBlend", 1.0);
            material.set_float("_ZWrite", 0.0);
            material.set_shader_pass_enabled("ShadowCaster", false);
        }
        BlendMode::Opaque
        | BlendMode::NoAlphaAdd
        | BlendMode::Mod
        | BlendMode::Mod2X
        | BlendMode::BlendAdd => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::model::{ColorData, MultiValueTrack, Skin, Texture, TextureUnit};

    fn metadata(flags: i16, blending_mode: u32) -> M2 {
        M2 {
            textures: vec![Texture {
                mtl_name: Some("skin".to_string()),
                ..Default::default()
            }],
            materials: vec![Material {
                flags,
                blending_mode,
            }],
            ..Default::default()
        }
    }

    fn imported() -> ImportedMaterial {
        ImportedMaterial {
            name: "skin".to_string(),
            diffuse_texture: Some("Assets/world/skin.png".to_string()),
        }
    }

    #[test]
    fn test_opaque_lit_defaults() {
        let material = configure_urp_material(&imported(), &metadata(0, 0));
        assert_eq!(material.shader, LIT_SHADER);
        assert_eq!(material.colors["_BaseColor"], [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(material.textures["_MainTex"], "Assets/world/skin.png");
        assert!(material.floats.is_empty());
        assert!(material.tags.is_empty());
        assert_eq!(material.render_queue, None);
    }

    #[test]
    fn test_two_sided_disables_culling() {
        let material = configure_urp_material(&imported(), &metadata(0x4, 0));
        assert!(material.double_sided_gi);
        assert_eq!(material.float("_Cull"), Some(0.0));
        assert_eq!(material.shader, LIT_SHADER);
    }

    #[test]
    fn test_alpha_key_enables_clip() {
        let material = configure_urp_material(&imported(), &metadata(0, 1));
        assert!(material.is_keyword_enabled("_ALPHATEST_ON"));
        assert_eq!(material.float("_AlphaClip"), Some(1.0));
    }

    #[test]
    fn test_alpha_blend_is_transparent() {
        let material = configure_urp_material(&imported(), &metadata(0, 2));
        assert_eq!(material.tags["RenderType"], "Transparent");
        assert_eq!(material.float("_Blend"), Some(0.0));
        assert_eq!(material.float("_Surface"), Some(1.0));
        assert_eq!(material.float("_ZWrite"), Some(0.0));
    }

    #[test]
    fn test_unlit_and_add_both_apply() {
        let material = configure_urp_material(&imported(), &metadata(0x1, 4));
        assert_eq!(material.shader, UNLIT_SHADER);
        assert_eq!(material.tags["RenderType"], "Transparent");
        assert_eq!(material.render_queue, Some(RENDER_QUEUE_TRANSPARENT));
        assert_eq!(material.keywords.get("_ALPHAPREMULTIPLY_ON"), Some(&false));
        assert_eq!(material.float("_SrcBlend"), Some(1.0));
        assert_eq!(material.float("_DstBlend"), Some(1.0));
        assert_eq!(material.float("_Blend"), Some(1.0));
        assert_eq!(material.float("_ZWrite"), Some(0.0));
        assert!(!material.is_shader_pass_enabled("ShadowCaster"));
    }

    #[test]
    fn test_modulate_modes_leave_material_alone() {
        for mode in [3, 5, 6, 7] {
            let material = configure_urp_material(&imported(), &metadata(0, mode));
            assert!(material.floats.is_empty(), "mode {mode}");
            assert!(material.tags.is_empty(), "mode {mode}");
        }
    }

    #[test]
    fn test_base_color_from_color_track() {
        let mut metadata = metadata(0, 0);
        metadata.skin = Some(Skin {
            texture_units: vec![TextureUnit {
                skin_selection_index: 0,
                geoset_index: 0,
                color_index: 0,
            }],
            ..Default::default()
        });
        metadata.colors = vec![ColorData {
            color: MultiValueTrack {
                timestamps: vec![vec![0]],
                values: vec![vec![vec![0.5, 0.0, 0.25]]],
                ..Default::default()
            },
            ..Default::default()
        }];

        let material = configure_urp_material(&imported(), &metadata);
        assert_eq!(material.colors["_BaseColor"], [0.5, 0.0, 0.25, 1.0]);
    }
}

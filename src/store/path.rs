use std::path::{Component, Path, PathBuf};

/// Root folder every project asset path starts from
pub const ASSETS_ROOT: &str = "Assets";

/// Sibling file with the same base name and another extension
pub fn sidecar_path(asset_path: &Path, extension: &str) -> PathBuf {
    asset_path.with_extension(extension)
}

/// Resolve `.` and `..` without touching the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Cut everything before the first `Assets` component
pub fn reroot_at_assets(path: &Path) -> PathBuf {
    let normalized = normalize(path);
    let components: Vec<_> = normalized.components().collect();
    match components
        .iter()
        .position(|c| c.as_os_str() == ASSETS_ROOT)
    {
        Some(start) => components[start..].iter().collect(),
        None => normalized,
    }
}

/// Forward-slash key used to index assets
pub fn asset_key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_path() {
        assert_eq!(
            sidecar_path(Path::new("Assets/world/crystal.obj"), "json"),
            PathBuf::from("Assets/world/crystal.json")
        );
    }

    #[test]
    fn test_normalize_parent_dirs() {
        assert_eq!(
            normalize(Path::new("Assets/maps/adt/../../textures/./grass.png")),
            PathBuf::from("Assets/textures/grass.png")
        );
    }

    #[test]
    fn test_normalize_keeps_leading_parent_dirs() {
        assert_eq!(normalize(Path::new("../../x")), PathBuf::from("../../x"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_reroot_at_assets() {
        assert_eq!(
            reroot_at_assets(Path::new("/home/me/project/Assets/maps/../tex/rock.png")),
            PathBuf::from("Assets/tex/rock.png")
        );
        assert_eq!(
            reroot_at_assets(Path::new("tex/rock.png")),
            PathBuf::from("tex/rock.png")
        );
    }
}

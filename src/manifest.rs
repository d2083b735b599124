//! Static manifests driving the restructure
//!
//! Everything Restage knows about the legacy layout and the target layout
//! lives here as constant data. The orchestration in [`crate::restructure`]
//! only iterates these tables; it never hard-codes a file name.

/// Target directory layout: top-level directory and its subdirectories.
///
/// An empty subdirectory list means the top-level directory itself is the
/// whole entry (`docs`).
pub const DIRECTORY_PLAN: &[(&str, &[&str])] = &[
    ("public", &["assets", "models", "textures", "audio"]),
    ("src", &["components", "utils", "styles"]),
    ("docs", &[]),
];

/// A fixed list of files to relocate from one legacy directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopySet {
    /// Human-readable label used in progress output
    pub label: &'static str,
    /// Legacy source directory, relative to the base path
    pub source_dir: &'static str,
    /// Destination directory, relative to the base path
    pub dest_dir: &'static str,
    /// File names looked up directly under `source_dir`
    pub files: &'static [&'static str],
    /// When true, the whole set is skipped unless `source_dir` exists.
    /// When false, each file is probed individually.
    pub requires_source_dir: bool,
}

/// A-Frame interaction components from the campus tour project.
pub const COMPONENT_SET: CopySet = CopySet {
    label: "component",
    source_dir: "Campus-Tour-NYUAD-main",
    dest_dir: "src/components",
    files: &[
        "pinchable.js",
        "color-change.js",
        "slider.js",
        "size-change.js",
        "button.js",
        "menu.js",
        "pressable.js",
        "event-manager.js",
        "info-message.js",
    ],
    requires_source_dir: false,
};

/// WebXR helper scripts from the samples project.
pub const UTILITY_SET: CopySet = CopySet {
    label: "utility",
    source_dir: "webxr-samples-main/js",
    dest_dir: "src/utils",
    files: &["hit-test.js", "stereo-util.js"],
    requires_source_dir: true,
};

/// A legacy media tree copied recursively, relative paths preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaSource {
    /// Legacy source tree, relative to the base path
    pub source_dir: &'static str,
    /// Destination tree, relative to the base path
    pub dest_dir: &'static str,
}

/// Media trees relocated under `public/`.
pub const MEDIA_SOURCES: &[MediaSource] = &[
    MediaSource {
        source_dir: "webxr-samples-main/media/textures",
        dest_dir: "public/textures",
    },
    MediaSource {
        source_dir: "webxr-samples-main/media/gltf",
        dest_dir: "public/models",
    },
];

/// Legacy directories that become redundant after restructuring.
///
/// Restage only reports these; it never deletes them.
pub const LEGACY_DIRS: &[&str] = &["Campus-Tour-NYUAD-main", "webxr-samples-main", ".git"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_covers_copy_destinations() {
        let planned: Vec<String> = DIRECTORY_PLAN
            .iter()
            .flat_map(|(main, subs)| {
                std::iter::once(main.to_string())
                    .chain(subs.iter().map(move |s| format!("{main}/{s}")))
            })
            .collect();

        for set in [COMPONENT_SET, UTILITY_SET] {
            assert!(
                planned.iter().any(|p| p == set.dest_dir),
                "destination '{}' missing from directory plan",
                set.dest_dir
            );
        }
        for media in MEDIA_SOURCES {
            assert!(
                planned.iter().any(|p| p == media.dest_dir),
                "destination '{}' missing from directory plan",
                media.dest_dir
            );
        }
    }

    #[test]
    fn test_copy_sets_have_no_duplicate_files() {
        for set in [COMPONENT_SET, UTILITY_SET] {
            let mut seen = std::collections::HashSet::new();
            for file in set.files {
                assert!(seen.insert(file), "duplicate file '{file}' in {}", set.label);
            }
        }
    }

    #[test]
    fn test_legacy_dirs_cover_copy_sources() {
        for set in [COMPONENT_SET, UTILITY_SET] {
            let top = set.source_dir.split('/').next().unwrap();
            assert!(LEGACY_DIRS.contains(&top));
        }
    }
}

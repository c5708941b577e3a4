//! Build phase: walk the style directories into an [`IconSet`].
use std::collections::BTreeMap;
use std::path::Path;

use super::{AssetFs, ICON_STYLES, IconSet, IconSource, svg_base_name};
use crate::error::IconError;

/// Scan `root` for every style in [`ICON_STYLES`] and build the name mapping.
///
/// Styles are processed in declaration order and each insert overwrites any
/// earlier entry with the same logical name, so the last style wins
/// (`micro` over `mini` over `solid` over `outline`). File contents are not
/// read here.
///
/// # Errors
///
/// Returns [`IconError::DirectoryNotFound`] as soon as one style directory is
/// missing; no partial set is returned.
pub fn scan(root: &Path, fs: &dyn AssetFs) -> Result<IconSet, IconError> {
    let mut icons = BTreeMap::new();
    let mut skipped = Vec::new();

    for style in ICON_STYLES {
        let dir = root.join(style.subpath());
        let mut files = fs.list_dir(&dir)?;
        files.sort();

        for path in files {
            let Some(base_name) = svg_base_name(&path) else {
                skipped.push(path);
                continue;
            };
            let source = IconSource {
                base_name,
                style,
                path,
            };
            icons.insert(source.logical_name(), source);
        }
    }

    Ok(IconSet { icons, skipped })
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::icons::{IconStyle, MockAssetFs};
    use std::path::PathBuf;

    /// Mock filesystem serving a fixed listing per style directory.
    fn mock_tree(listing: Vec<(&str, Vec<&str>)>) -> MockAssetFs {
        let listing: Vec<(String, Vec<String>)> = listing
            .into_iter()
            .map(|(dir, files)| {
                (
                    dir.to_string(),
                    files.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();
        let mut fs = MockAssetFs::new();
        fs.expect_list_dir().returning(move |dir| {
            let dir_str = dir.to_string_lossy().replace('\\', "/");
            listing
                .iter()
                .find(|(subpath, _)| dir_str.ends_with(subpath.as_str()))
                .map(|(_, files)| files.iter().map(|f| dir.join(f)).collect())
                .ok_or_else(|| IconError::DirectoryNotFound {
                    path: dir.to_path_buf(),
                })
        });
        fs
    }

    #[test]
    fn every_svg_yields_one_entry_per_style() {
        let fs = mock_tree(vec![
            ("24/outline", vec!["home.svg", "user.svg"]),
            ("24/solid", vec!["home.svg"]),
            ("20/solid", vec!["home.svg"]),
            ("16/solid", vec!["bolt.svg"]),
        ]);
        let set = scan(Path::new("/icons"), &fs).unwrap();

        let names: Vec<&str> = set.names().collect();
        assert_eq!(
            names,
            ["bolt-micro", "home", "home-mini", "home-solid", "user"]
        );
        assert_eq!(set.get("home-mini").unwrap().style, IconStyle::Mini);
        assert_eq!(
            set.get("home-solid").unwrap().path,
            PathBuf::from("/icons/24/solid/home.svg")
        );
    }

    #[test]
    fn later_style_wins_name_collisions() {
        // `a-micro.svg` in outline and `a.svg` in micro both map to `a-micro`.
        let fs = mock_tree(vec![
            ("24/outline", vec!["a-micro.svg"]),
            ("24/solid", vec![]),
            ("20/solid", vec![]),
            ("16/solid", vec!["a.svg"]),
        ]);
        let set = scan(Path::new("/icons"), &fs).unwrap();

        assert_eq!(set.len(), 1);
        let winner = set.get("a-micro").unwrap();
        assert_eq!(winner.style, IconStyle::Micro);
        assert_eq!(winner.path, PathBuf::from("/icons/16/solid/a.svg"));
    }

    #[test]
    fn solid_over_outline_collision() {
        let fs = mock_tree(vec![
            ("24/outline", vec!["x-solid.svg"]),
            ("24/solid", vec!["x.svg"]),
            ("20/solid", vec![]),
            ("16/solid", vec![]),
        ]);
        let set = scan(Path::new("/icons"), &fs).unwrap();
        assert_eq!(set.get("x-solid").unwrap().style, IconStyle::Solid);
    }

    #[test]
    fn missing_style_directory_fails_whole_scan() {
        let fs = mock_tree(vec![
            ("24/outline", vec!["home.svg"]),
            ("24/solid", vec!["home.svg"]),
            ("16/solid", vec!["home.svg"]),
        ]);
        let err = scan(Path::new("/icons"), &fs).unwrap_err();
        match err {
            IconError::DirectoryNotFound { path } => {
                assert!(path.ends_with("20/solid"), "wrong path: {}", path.display());
            }
            other => panic!("expected DirectoryNotFound, got {other}"),
        }
    }

    #[test]
    fn non_svg_entries_are_skipped() {
        let fs = mock_tree(vec![
            ("24/outline", vec!["home.svg", ".DS_Store", "LICENSE"]),
            ("24/solid", vec![]),
            ("20/solid", vec![]),
            ("16/solid", vec![]),
        ]);
        let set = scan(Path::new("/icons"), &fs).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.skipped().len(), 2);
    }

    #[test]
    fn scan_is_idempotent() {
        let listing = || {
            vec![
                ("24/outline", vec!["b.svg", "a.svg"]),
                ("24/solid", vec!["a.svg"]),
                ("20/solid", vec!["c.svg"]),
                ("16/solid", vec!["a.svg"]),
            ]
        };
        let first = scan(Path::new("/icons"), &mock_tree(listing())).unwrap();
        let second = scan(Path::new("/icons"), &mock_tree(listing())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scan_does_not_read_file_contents() {
        let mut fs = mock_tree(vec![
            ("24/outline", vec!["home.svg"]),
            ("24/solid", vec![]),
            ("20/solid", vec![]),
            ("16/solid", vec![]),
        ]);
        fs.expect_read_to_string().never();
        scan(Path::new("/icons"), &fs).unwrap();
    }
}

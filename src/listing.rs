//! Enumerating directory-menu candidates.

use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate subdirectories of every root, one level deep.
///
/// Roots are visited in the order given; entries inside a root are sorted by
/// file name.  Symlinks are not followed.  A root that cannot be read is
/// logged and skipped, the way `find` would report it and carry on.
pub fn subdirectories<P: AsRef<Path>>(roots: &[P]) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    for root in roots {
        let root = root.as_ref();
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in walker {
            match entry {
                Ok(e) if e.file_type().is_dir() => dirs.push(e.into_path()),
                Ok(_) => {}
                Err(e) => warn!("skipping unreadable entry under {}: {}", root.display(), e),
            }
        }
    }
    dirs
}

/// Menu lines for `dirs` followed by `quit_entry`.
///
/// Paths that render as an empty line are dropped.  The quit entry is
/// always last.
pub fn menu_lines(dirs: &[PathBuf], quit_entry: &str) -> Vec<String> {
    dirs.iter()
        .map(|d| d.to_string_lossy().into_owned())
        .filter(|l| !l.is_empty())
        .chain(std::iter::once(quit_entry.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_each_root_in_order() {
        let tmp = tempdir().unwrap();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");
        fs::create_dir_all(a.join("x")).unwrap();
        fs::create_dir_all(b.join("y")).unwrap();

        let dirs = subdirectories(&[&a, &b]);
        assert_eq!(dirs, vec![a.join("x"), b.join("y")]);

        let lines = menu_lines(&dirs, "quit");
        assert_eq!(
            lines,
            vec![
                a.join("x").display().to_string(),
                b.join("y").display().to_string(),
                "quit".to_string(),
            ]
        );
    }

    #[test]
    fn only_one_level_and_only_directories() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("top/nested")).unwrap();
        fs::write(tmp.path().join("file.txt"), "x").unwrap();
        fs::create_dir(tmp.path().join(".hidden")).unwrap();

        let dirs = subdirectories(&[tmp.path()]);
        assert_eq!(
            dirs,
            vec![tmp.path().join(".hidden"), tmp.path().join("top")]
        );
    }

    #[test]
    fn entries_sorted_by_name_within_a_root() {
        let tmp = tempdir().unwrap();
        for name in ["c", "a", "b"] {
            fs::create_dir(tmp.path().join(name)).unwrap();
        }
        let names: Vec<_> = subdirectories(&[tmp.path()])
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn missing_root_is_skipped() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        let dirs = subdirectories(&[tmp.path().join("missing"), tmp.path().to_path_buf()]);
        assert_eq!(dirs, vec![tmp.path().join("real")]);
    }

    #[test]
    fn quit_entry_alone_when_nothing_found() {
        assert_eq!(menu_lines(&[], "quit"), vec!["quit".to_string()]);
    }
}

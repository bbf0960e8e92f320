//! Shared fixtures.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The `support/` tree: `a.txt` (five lines), `d1/b1.txt`, `d1/d2/c1.log`, `top.log`.
pub fn support_tree() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("support");
    fs::create_dir_all(root.join("d1/d2")).unwrap();
    fs::write(root.join("a.txt"), "this\nhas\nsome\ntext\nxyz\n").unwrap();
    fs::write(root.join("top.log"), "started\nerror: disk full\n").unwrap();
    fs::write(root.join("d1/b1.txt"), "b1 line\n").unwrap();
    fs::write(root.join("d1/d2/c1.log"), "error: again\nerror: and again\n").unwrap();
    (temp, root)
}

/// Paths relative to `root`, `/`-separated, as a sorted set.
pub fn relative<I>(root: &Path, paths: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = Result<PathBuf, sift::FsError>>,
{
    paths
        .into_iter()
        .map(|p| {
            p.unwrap()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

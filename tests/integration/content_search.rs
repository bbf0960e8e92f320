use std::fs;

use sift::{grep_rl, strict, Filter, FsError, WalkerConfig};

use crate::integration::support::{relative, set, support_tree};

#[test]
fn finds_files_by_content() {
    let (_temp, root) = support_tree();
    let found = relative(
        &root,
        grep_rl(&Filter::substring("error"), &root, &WalkerConfig::default()).unwrap(),
    );
    assert_eq!(found, set(&["top.log", "d1/d2/c1.log"]));
}

#[test]
fn each_file_reported_once() {
    let (_temp, root) = support_tree();
    let paths: Vec<_> = grep_rl(&Filter::pattern("error").unwrap(), &root, &WalkerConfig::default())
        .unwrap()
        .map(Result::unwrap)
        .collect();
    let mut deduped = paths.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(paths.len(), deduped.len());
}

#[test]
fn traversal_options_are_forwarded() {
    let (_temp, root) = support_tree();
    let shallow = WalkerConfig::default().with_max_depth(false);
    assert_eq!(
        relative(&root, grep_rl(&Filter::substring("error"), &root, &shallow).unwrap()),
        set(&["top.log"])
    );

    let txt_only = WalkerConfig::default().with_filter(Filter::substring(".txt"));
    assert_eq!(
        relative(&root, grep_rl(&Filter::substring("e"), &root, &txt_only).unwrap()),
        set(&["a.txt", "d1/b1.txt"])
    );
}

#[test]
fn read_failure_ends_the_search() {
    let (_temp, root) = support_tree();
    let config = WalkerConfig::default().with_filter(Filter::try_predicate(|p| {
        if p.ends_with("top.log") {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "refused"))
        } else {
            Ok(true)
        }
    }));
    let results: Vec<_> = grep_rl(&Filter::All, &root, &config).unwrap().collect();
    assert!(matches!(results.last(), Some(Err(FsError::Predicate { .. }))));
}

#[test]
fn strict_variant_reports_bad_root() {
    let (_temp, root) = support_tree();
    fs::write(root.join("plain"), "x").unwrap();
    assert!(strict::grep_rl(&Filter::All, root.join("plain"), &WalkerConfig::default()).is_err());
}

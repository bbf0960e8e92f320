use std::fs;

use sift::{grep, grep_with, head, line_count, lines, strict, tail, Filter, FsError, GrepOptions};

use crate::integration::support::support_tree;

fn collect<I: Iterator<Item = Result<String, FsError>>>(it: I) -> Vec<String> {
    it.collect::<Result<_, _>>().unwrap()
}

#[test]
fn support_scenario() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");

    assert_eq!(collect(head(&a, 2).unwrap()), vec!["this\n", "has\n"]);
    assert_eq!(collect(tail(&a, 2).unwrap()), vec!["text\n", "xyz\n"]);
    assert_eq!(line_count(&a).unwrap(), 5);
    assert_eq!(collect(grep(&Filter::substring("xyz"), &a).unwrap()), vec!["xyz\n"]);
}

#[test]
fn head_and_tail_cover_whole_file_when_n_is_large() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");
    let all = collect(lines(&a).unwrap());
    assert_eq!(all.len(), 5);
    assert_eq!(collect(head(&a, 5).unwrap()), all);
    assert_eq!(collect(head(&a, 50).unwrap()), all);
    assert_eq!(collect(tail(&a, 5).unwrap()), all);
    assert_eq!(collect(tail(&a, 50).unwrap()), all);
}

#[test]
fn unterminated_final_line() {
    let (_temp, root) = support_tree();
    let f = root.join("partial.txt");
    fs::write(&f, "one\ntwo").unwrap();
    assert_eq!(line_count(&f).unwrap(), 2);
    assert_eq!(collect(tail(&f, 1).unwrap()), vec!["two"]);
}

#[test]
fn grep_is_idempotent() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");
    let pattern = Filter::pattern("^(t|s)").unwrap();
    let first = collect(grep(&pattern, &a).unwrap());
    let second = collect(grep(&pattern, &a).unwrap());
    assert_eq!(first, vec!["this\n", "some\n", "text\n"]);
    assert_eq!(first, second);
}

#[test]
fn grep_with_any_of_and_predicate() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");
    assert_eq!(
        collect(grep(&Filter::any_of(["has", "xyz"]), &a).unwrap()),
        vec!["has\n", "xyz\n"]
    );
    assert_eq!(
        collect(grep(&Filter::predicate(|l| l.len() == 4), &a).unwrap()),
        vec!["this\n", "some\n", "text\n"]
    );
}

#[test]
fn missing_file_errors() {
    let (_temp, root) = support_tree();
    let missing = root.join("missing.txt");
    assert!(matches!(grep(&Filter::All, &missing), Err(FsError::Io { .. })));
    assert!(matches!(tail(&missing, 1), Err(FsError::Io { .. })));
    assert!(strict::line_count(&missing).is_err());
}

#[test]
fn non_positive_counts_are_rejected() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");
    assert!(matches!(head(&a, 0), Err(FsError::InvalidCount { .. })));
    assert!(matches!(tail(&a, 0), Err(FsError::InvalidCount { .. })));
    assert!(strict::head(&a, 0).is_err());
}

#[test]
fn line_count_shapes_disagree_on_directories() {
    let (_temp, root) = support_tree();
    let dir = root.join("d1");
    assert!(matches!(line_count(&dir), Err(FsError::IsADirectory { .. })));

    let err = strict::line_count(&dir).err().unwrap();
    match err.downcast_ref::<FsError>() {
        Some(FsError::Io { .. }) => {}
        other => panic!("expected underlying I/O error, got {:?}", other),
    }
}

#[test]
fn early_stop_releases_the_file() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");

    let mut window = head(&a, 2).unwrap();
    assert!(window.is_open());
    assert_eq!(window.next().unwrap().unwrap(), "this\n");
    assert!(window.is_open());
    assert_eq!(window.next().unwrap().unwrap(), "has\n");
    assert!(!window.is_open(), "three lines left unread");

    let options = GrepOptions {
        max_count: Some(1),
        ..GrepOptions::default()
    };
    let mut hits = grep_with(&Filter::substring("s"), &a, options).unwrap();
    assert_eq!(hits.next().unwrap().unwrap(), "this\n");
    assert!(!hits.is_open(), "stopped at the first hit");
    assert!(hits.next().is_none());
}

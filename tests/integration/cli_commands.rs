use clap::Parser;
use sift::config::SiftConfig;
use sift::tooling::cli::{Cli, CliContext};

use crate::integration::support::support_tree;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    CliContext::with_config(SiftConfig::default()).execute(&cli.command)
}

#[test]
fn head_tail_wc_text_output() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");
    let a = a.to_str().unwrap();

    assert_eq!(run(&["sift", "head", a, "-n", "2"]).unwrap(), "this\nhas\n");
    assert_eq!(run(&["sift", "tail", a, "-n", "2"]).unwrap(), "text\nxyz\n");
    assert_eq!(run(&["sift", "wc", a]).unwrap(), format!("5 {}\n", a));
}

#[test]
fn ls_no_recurse_json() {
    let (_temp, root) = support_tree();
    let out = run(&["sift", "ls", root.to_str().unwrap(), "--no-recurse", "--format", "json"]).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
    let mut paths: Vec<String> = doc["paths"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().replace('\\', "/"))
        .collect();
    paths.sort();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("support/a.txt"));
    assert!(paths[1].ends_with("support/top.log"));
}

#[test]
fn grep_and_grep_rl() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");
    assert_eq!(
        run(&["sift", "grep", "xyz", a.to_str().unwrap()]).unwrap(),
        "xyz\n"
    );
    assert_eq!(
        run(&["sift", "grep", "-v", "-F", "s", a.to_str().unwrap()]).unwrap(),
        "text\nxyz\n"
    );

    let out = run(&["sift", "grep-rl", "error", root.to_str().unwrap(), "--match", ".log"]).unwrap();
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn errors_surface() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");
    assert!(run(&["sift", "ls", a.to_str().unwrap()]).is_err());
    assert!(run(&["sift", "head", a.to_str().unwrap(), "-n", "0"]).is_err());
    assert!(run(&["sift", "grep", "(", a.to_str().unwrap()]).is_err());
    assert!(run(&["sift", "wc", root.to_str().unwrap()]).is_err());
}

#[test]
fn unknown_format_rejected_by_every_command() {
    let (_temp, root) = support_tree();
    let a = root.join("a.txt");
    let a = a.to_str().unwrap();
    let dir = root.to_str().unwrap();

    for args in [
        vec!["sift", "wc", a, "--format", "xml"],
        vec!["sift", "head", a, "--format", "xml"],
        vec!["sift", "tail", a, "--format", "xml"],
        vec!["sift", "grep", "x", a, "--format", "xml"],
        vec!["sift", "ls", dir, "--format", "xml"],
        vec!["sift", "grep-rl", "x", dir, "--format", "xml"],
    ] {
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("Invalid format"), "{:?}", args);
    }

    let out = run(&["sift", "wc", a, "--format", "json"]).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(doc["lines"], 5);
}

use labeltree::model::outline::to_json;
use labeltree::parser::label_source::read_label_file;
use labeltree::render::{RenderConfig, to_html, write_html_file};
use labeltree::{LabelTreeError, parse_label_file, render_label_file};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn taxonomy_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const RAPIDWORDS_EXCERPT: &str = "\
1 Universe, creation
1.1 Sky
1.1.1 Sun
1.1.1.1 Moon

2 Person
2.1 Body
";

#[test]
fn test_parse_label_file() {
    let file = taxonomy_file(RAPIDWORDS_EXCERPT);
    let tree = parse_label_file(file.path()).unwrap();

    assert_eq!(tree.num_labels(), 6);
    assert_eq!(tree.top_level().map(|n| n.key()).collect::<Vec<_>>(), vec!["1", "2"]);
    assert_eq!(tree.find("1.1.1.1").unwrap().text(), Some("1.1.1.1 Moon"));
    assert_eq!(tree.find("1").unwrap().text(), Some("1 Universe, creation"));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rapidwords.txt");

    let err = read_label_file(&path).unwrap_err();
    match &err {
        LabelTreeError::Io { path: p, .. } => assert_eq!(p, &path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("rapidwords.txt"));
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x31, 0x20, 0xff, 0xfe, b'\n']).unwrap();
    assert!(matches!(read_label_file(file.path()), Err(LabelTreeError::Io { .. })));
}

#[test]
fn test_render_label_file_and_write_html() {
    let file = taxonomy_file(RAPIDWORDS_EXCERPT);
    let (doc, mount, tree) = render_label_file(file.path(), "id_rapidwords", &RenderConfig::default()).unwrap();

    assert_eq!(doc.children(mount).len(), 2);
    assert!(tree.find("2.1").unwrap().source_item().is_some());

    let out = NamedTempFile::new().unwrap();
    write_html_file(out.path(), &doc, mount).unwrap();
    let written = fs::read_to_string(out.path()).unwrap();
    assert_eq!(written, format!("{}\n", to_html(&doc, mount)));
    assert!(written.contains(r#"id="base-rw-1-1-1-1""#));
}

#[test]
fn test_json_outline_of_file() {
    let file = taxonomy_file("9 Grammar\n9.1.2 Verb\n");
    let tree = parse_label_file(file.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&to_json(&tree).unwrap()).unwrap();

    assert_eq!(json[0]["id"], "rw-9");
    assert_eq!(json[0]["children"][0]["full_key"], "9.1");
    assert!(json[0]["children"][0].get("text").is_none());
    assert_eq!(json[0]["children"][0]["children"][0]["text"], "9.1.2 Verb");
}

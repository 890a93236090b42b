use std::fs;
use std::path::Path;

fn out_dir() -> &'static Path {
    Path::new(env!("OUT_DIR"))
}

#[test]
fn test_manpage_generation() {
    let man_path = out_dir().join("man").join("man1").join("bench-plot.1");
    assert!(man_path.exists(), "Missing manpage: {}", man_path.display());

    let content = fs::read_to_string(&man_path)
        .unwrap_or_else(|_| panic!("Failed to read manpage: {}", man_path.display()));
    assert!(content.contains(".TH"), "Manpage lacks a title header");
    assert!(content.contains("format"), "Manpage does not document --format");
}

#[test]
fn test_markdown_documentation() {
    let markdown_path = out_dir().join("manpage.md");
    let content = fs::read_to_string(&markdown_path).unwrap_or_else(|_| {
        panic!(
            "Failed to read markdown documentation: {}",
            markdown_path.display()
        )
    });

    for expected in ["bench-plot", "--format", "--verbose", "DIRECTORY"] {
        assert!(
            content.contains(expected),
            "Markdown documentation does not contain: {}",
            expected
        );
    }
}

use globcopy::copy::format_matches;
use globcopy::reporting::render_tree;
use globcopy::trie::Trie;
use globcopy::utils::{display_path, format_xml_content, normalize_path};
use globcopy::walker::MatchedFile;
use std::path::Path;

#[test]
fn test_format_xml_content_shape() {
    let formatted = format_xml_content("export class Task {}", "src/task.component.ts");
    assert_eq!(
        formatted,
        "<file path=\"src/task.component.ts\">\nexport class Task {}\n</file>\n"
    );
}

#[test]
fn test_content_is_not_escaped() {
    let content = "<div class=\"a\">&amp; </file></div>";
    let formatted = format_xml_content(content, "x.html");
    assert!(formatted.contains(content));
}

#[test]
fn test_content_round_trips_between_tags() {
    let contents = ["", "one line", "trailing newline\n", "a\r\nb\r\n\n"];
    for content in contents {
        let formatted = format_xml_content(content, "f.txt");
        let opening = "<file path=\"f.txt\">\n";
        let inner = formatted
            .strip_prefix(opening)
            .and_then(|rest| rest.strip_suffix("</file>\n"))
            .expect("wrapper tags");
        assert_eq!(inner.strip_suffix('\n'), Some(content));
    }
}

#[test]
fn test_format_matches_concatenates_in_order() {
    let files = vec![
        MatchedFile {
            relative_path: "b.txt".to_string(),
            content: "B".to_string(),
        },
        MatchedFile {
            relative_path: "a.txt".to_string(),
            content: "A".to_string(),
        },
    ];
    assert_eq!(
        format_matches(&files),
        "<file path=\"b.txt\">\nB\n</file>\n<file path=\"a.txt\">\nA\n</file>\n"
    );
}

#[test]
fn test_normalize_path() {
    assert_eq!(normalize_path(Path::new("./src/main.rs")), "src/main.rs");
    assert_eq!(normalize_path(Path::new("src/main.rs")), "src/main.rs");
}

#[test]
fn test_display_path_relative_to_root() {
    let root = Path::new("/work/project");
    assert_eq!(
        display_path(Path::new("/work/project/src/app/x.ts"), root),
        "src/app/x.ts"
    );
}

#[cfg(unix)]
#[test]
fn test_display_path_outside_root_is_absolute() {
    let root = Path::new("/work/project");
    assert_eq!(display_path(Path::new("/elsewhere/x.ts"), root), "/elsewhere/x.ts");
}

#[test]
fn test_token_tree_totals_and_rendering() {
    let mut trie = Trie::new();
    trie.insert("src/app/a.ts", 10);
    trie.insert("src/b.ts", 5);
    trie.insert("README.md", 2);

    assert_eq!(trie.root().total_tokens(), 17);

    let lines = render_tree(trie.root(), "");
    assert_eq!(
        lines,
        vec![
            "┣━━ README.md (2 tokens)",
            "┗━━ src/ (15 tokens)",
            "    ┣━━ app/ (10 tokens)",
            "    ┃   ┗━━ a.ts (10 tokens)",
            "    ┗━━ b.ts (5 tokens)",
        ]
    );
}

//! End-to-end unified-diff fixtures.
//!
//! These are byte-for-byte against the addition-preferred LCS tie-break;
//! a different tie-break convention would produce equally valid diffs
//! with different bytes.

use confluence_diff::{diff, stats, DiffLineKind, DiffOptions, NO_DIFFERENCES};
use pretty_assertions::assert_eq;

#[test]
fn single_line_replacement_fixture() {
    let (text, result) = diff("a\nb\nc", "a\nx\nc", &DiffOptions::default());

    assert_eq!(
        text,
        "--- a/original\n\
         +++ b/modified\n\
         @@ -1,3 +1,3 @@\n \
         a\n\
         -b\n\
         +x\n \
         c\n"
    );
    assert_eq!(result.hunks.len(), 1);
    assert_eq!(result.additions, 1);
    assert_eq!(result.deletions, 1);
    assert_eq!(result.changes(), 2);
}

#[test]
fn no_differences_sentinel_for_any_identical_text() {
    for text in ["", "one line", "a\nb\nc", "trailing\n"] {
        let (rendered, result) = diff(text, text, &DiffOptions::default());
        assert_eq!(rendered, NO_DIFFERENCES);
        assert!(result.is_empty());

        let s = stats(text, text);
        assert_eq!((s.additions, s.deletions, s.changes), (0, 0, 0));
    }
}

#[test]
fn change_on_the_first_line_truncates_leading_context() {
    let (text, result) = diff("first\nb\nc\nd\ne", "FIRST\nb\nc\nd\ne", &DiffOptions::default());
    assert_eq!(result.hunks.len(), 1);
    assert_eq!(result.hunks[0].old_start, 1);
    assert!(text.contains("@@ -1,4 +1,4 @@"));
}

#[test]
fn change_on_the_last_line_truncates_trailing_context() {
    let (_, result) = diff("a\nb\nc\nd\nlast", "a\nb\nc\nd\nLAST", &DiffOptions::default());
    assert_eq!(result.hunks.len(), 1);
    let hunk = &result.hunks[0];
    assert_eq!(hunk.old_start + hunk.old_count - 1, 5);
}

#[test]
fn distant_changes_land_in_separate_hunks() {
    let old = "a1\nk\nk\nk\nk\nk\nk\nk\nk\nz1";
    let new = "A1\nk\nk\nk\nk\nk\nk\nk\nk\nZ1";
    let (text, result) = diff(old, new, &DiffOptions::default());
    assert_eq!(result.hunks.len(), 2);
    assert_eq!(text.matches("@@").count(), 4);
}

#[test]
fn nearby_changes_share_a_hunk() {
    let old = "a1\nk\nk\nk\nz1";
    let new = "A1\nk\nk\nk\nZ1";
    let (_, result) = diff(old, new, &DiffOptions::default());
    assert_eq!(result.hunks.len(), 1);
}

#[test]
fn every_diff_line_comes_from_one_of_the_inputs() {
    let old = "alpha\nbeta\ngamma\ndelta";
    let new = "alpha\nbravo\ngamma\nepsilon\ndelta";
    let (_, result) = diff(old, new, &DiffOptions::default());

    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    for line in result.hunks.iter().flat_map(|h| &h.lines) {
        match line.kind {
            DiffLineKind::Add => assert!(new_lines.contains(&line.text.as_str())),
            DiffLineKind::Remove => assert!(old_lines.contains(&line.text.as_str())),
            DiffLineKind::Context => {
                assert!(old_lines.contains(&line.text.as_str()));
                assert!(new_lines.contains(&line.text.as_str()));
            }
        }
    }
}

#[test]
fn empty_versus_content_counts_one_removal() {
    // The empty string is a single empty line, not an empty sequence.
    let (_, result) = diff("", "hello", &DiffOptions::default());
    assert_eq!(result.additions, 1);
    assert_eq!(result.deletions, 1);
}

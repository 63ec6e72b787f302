//! LCS alignment and edit-script reconstruction.
//!
//! Standard O(m*n) dynamic-programming table over the two line sequences,
//! walked backwards from `(m, n)` to recover a line-level edit script.
//!
//! Tie-break convention: when stepping back in either sequence is equally
//! good (`dp[i][j-1] == dp[i-1][j]`), the addition is taken. Other
//! conventions produce equally valid diffs but different bytes; test
//! fixtures depend on this one.

/// Classification of a single line in an edit script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffLineKind {
    /// Present in both sequences.
    Context,
    /// Present only in the new sequence.
    Add,
    /// Present only in the old sequence.
    Remove,
}

/// One line of the edit script, with its 1-based position in the old
/// and/or new sequence where defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    pub text: String,
    /// 1-based line number in the old sequence; `None` for additions.
    pub old_line: Option<usize>,
    /// 1-based line number in the new sequence; `None` for removals.
    pub new_line: Option<usize>,
}

impl DiffLine {
    fn context(text: &str, old_line: usize, new_line: usize) -> Self {
        Self {
            kind: DiffLineKind::Context,
            text: text.to_string(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    fn add(text: &str, new_line: usize) -> Self {
        Self {
            kind: DiffLineKind::Add,
            text: text.to_string(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    fn remove(text: &str, old_line: usize) -> Self {
        Self {
            kind: DiffLineKind::Remove,
            text: text.to_string(),
            old_line: Some(old_line),
            new_line: None,
        }
    }

    /// Returns `true` for additions and removals.
    pub fn is_change(&self) -> bool {
        self.kind != DiffLineKind::Context
    }
}

/// Splits a text into its line sequence. The empty string is a single
/// empty line, never an empty sequence.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Computes the line-level edit script between two texts.
///
/// The returned sequence, read in order, reconstructs the old text
/// (context + removals) and the new text (context + additions).
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let m = old_lines.len();
    let n = new_lines.len();

    // dp[i][j] = LCS length of old[..i] and new[..j].
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if old_lines[i - 1] == new_lines[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut script = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if old_lines[i - 1] == new_lines[j - 1] {
            script.push(DiffLine::context(old_lines[i - 1], i, j));
            i -= 1;
            j -= 1;
        } else if dp[i][j - 1] >= dp[i - 1][j] {
            script.push(DiffLine::add(new_lines[j - 1], j));
            j -= 1;
        } else {
            script.push(DiffLine::remove(old_lines[i - 1], i));
            i -= 1;
        }
    }
    while j > 0 {
        script.push(DiffLine::add(new_lines[j - 1], j));
        j -= 1;
    }
    while i > 0 {
        script.push(DiffLine::remove(old_lines[i - 1], i));
        i -= 1;
    }

    script.reverse();
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(script: &[DiffLine]) -> Vec<DiffLineKind> {
        script.iter().map(|l| l.kind).collect()
    }

    #[test]
    fn identical_texts_are_all_context() {
        let script = diff_lines("a\nb\nc", "a\nb\nc");
        assert_eq!(
            kinds(&script),
            vec![DiffLineKind::Context; 3],
        );
        for (idx, line) in script.iter().enumerate() {
            assert_eq!(line.old_line, Some(idx + 1));
            assert_eq!(line.new_line, Some(idx + 1));
        }
    }

    #[test]
    fn single_line_replacement_removes_then_adds() {
        let script = diff_lines("a\nb\nc", "a\nx\nc");
        assert_eq!(
            kinds(&script),
            vec![
                DiffLineKind::Context,
                DiffLineKind::Remove,
                DiffLineKind::Add,
                DiffLineKind::Context,
            ]
        );
        assert_eq!(script[1].text, "b");
        assert_eq!(script[1].old_line, Some(2));
        assert_eq!(script[2].text, "x");
        assert_eq!(script[2].new_line, Some(2));
    }

    #[test]
    fn empty_string_is_one_empty_line() {
        let script = diff_lines("", "");
        assert_eq!(script.len(), 1);
        assert_eq!(script[0].kind, DiffLineKind::Context);
        assert_eq!(script[0].text, "");
    }

    #[test]
    fn script_reconstructs_both_sides() {
        let old = "one\ntwo\nthree\nfour";
        let new = "one\nthree\nextra\nfour";
        let script = diff_lines(old, new);

        let rebuilt_old: Vec<&str> = script
            .iter()
            .filter(|l| l.kind != DiffLineKind::Add)
            .map(|l| l.text.as_str())
            .collect();
        let rebuilt_new: Vec<&str> = script
            .iter()
            .filter(|l| l.kind != DiffLineKind::Remove)
            .map(|l| l.text.as_str())
            .collect();

        assert_eq!(rebuilt_old.join("\n"), old);
        assert_eq!(rebuilt_new.join("\n"), new);
    }

    #[test]
    fn disjoint_texts_remove_everything_then_add_everything() {
        let script = diff_lines("a\nb", "x\ny\nz");
        let removes = script.iter().filter(|l| l.kind == DiffLineKind::Remove).count();
        let adds = script.iter().filter(|l| l.kind == DiffLineKind::Add).count();
        assert_eq!(removes, 2);
        assert_eq!(adds, 3);
    }
}

//! Unified-diff rendering and aggregate statistics.

use crate::hunk::{group_hunks, summarize, DiffResult};
use crate::lcs::{diff_lines, DiffLineKind};

/// Body emitted instead of headers when the inputs are identical.
pub const NO_DIFFERENCES: &str = "No differences found.";

/// Rendering options for [`diff`].
#[derive(Clone, Debug)]
pub struct DiffOptions {
    /// Unchanged lines kept around each change. Defaults to 3.
    pub context_lines: usize,
    /// Label for the `---` header. Defaults to `a/original`.
    pub old_label: String,
    /// Label for the `+++` header. Defaults to `b/modified`.
    pub new_label: String,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: 3,
            old_label: "a/original".to_string(),
            new_label: "b/modified".to_string(),
        }
    }
}

impl DiffOptions {
    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    pub fn with_labels(mut self, old_label: impl Into<String>, new_label: impl Into<String>) -> Self {
        self.old_label = old_label.into();
        self.new_label = new_label.into();
        self
    }
}

/// Aggregate change counts for a pair of texts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    /// Always `additions + deletions`.
    pub changes: usize,
}

/// Computes the unified diff between two texts.
///
/// Returns the rendered diff (or the [`NO_DIFFERENCES`] sentinel when the
/// texts are identical) together with the structured [`DiffResult`].
pub fn diff(old: &str, new: &str, options: &DiffOptions) -> (String, DiffResult) {
    let script = diff_lines(old, new);
    let result = summarize(group_hunks(&script, options.context_lines));
    let text = render_unified(&result, options);
    (text, result)
}

/// Renders a [`DiffResult`] as unified-diff text.
pub fn render_unified(result: &DiffResult, options: &DiffOptions) -> String {
    if result.hunks.is_empty() {
        return NO_DIFFERENCES.to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("--- {}\n", options.old_label));
    out.push_str(&format!("+++ {}\n", options.new_label));

    for hunk in &result.hunks {
        out.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count
        ));
        for line in &hunk.lines {
            let prefix = match line.kind {
                DiffLineKind::Context => ' ',
                DiffLineKind::Add => '+',
                DiffLineKind::Remove => '-',
            };
            out.push(prefix);
            out.push_str(&line.text);
            out.push('\n');
        }
    }

    out
}

/// Change statistics for a pair of texts, without rendering.
pub fn stats(old: &str, new: &str) -> DiffStats {
    let script = diff_lines(old, new);
    let additions = script.iter().filter(|l| l.kind == DiffLineKind::Add).count();
    let deletions = script.iter().filter(|l| l.kind == DiffLineKind::Remove).count();
    DiffStats {
        additions,
        deletions,
        changes: additions + deletions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identical_texts_render_the_sentinel() {
        let (text, result) = diff("same\ntext", "same\ntext", &DiffOptions::default());
        assert_eq!(text, NO_DIFFERENCES);
        assert!(result.is_empty());
    }

    #[test]
    fn stats_are_zero_for_identical_texts() {
        assert_eq!(stats("a\nb", "a\nb"), DiffStats::default());
    }

    #[test]
    fn stats_identity_holds() {
        let s = stats("one\ntwo\nthree", "one\n2\n3\nfour");
        assert_eq!(s.changes, s.additions + s.deletions);
    }

    #[test]
    fn labels_appear_in_the_headers() {
        let options = DiffOptions::default().with_labels("a/page", "b/local");
        let (text, _) = diff("a", "b", &options);
        assert!(text.starts_with("--- a/page\n+++ b/local\n"));
    }
}

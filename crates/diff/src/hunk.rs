//! Grouping an edit script into context-bounded hunks.

use crate::lcs::{DiffLine, DiffLineKind};

/// A contiguous diff region: at least one change, bounded by up to
/// `context_lines` of unchanged lines on each side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hunk {
    /// 1-based first old line covered (0 when the hunk touches no old lines).
    pub old_start: usize,
    /// Number of old lines (context + removals) in the hunk.
    pub old_count: usize,
    /// 1-based first new line covered (0 when the hunk touches no new lines).
    pub new_start: usize,
    /// Number of new lines (context + additions) in the hunk.
    pub new_count: usize,
    pub lines: Vec<DiffLine>,
}

/// An ordered set of hunks plus aggregate change counts.
///
/// Context lines are never counted; `additions + deletions` is the total
/// number of changed lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub hunks: Vec<Hunk>,
    pub additions: usize,
    pub deletions: usize,
}

impl DiffResult {
    /// Total changed lines across all hunks.
    pub fn changes(&self) -> usize {
        self.additions + self.deletions
    }

    /// `true` when the inputs were identical.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }
}

/// Groups an edit script into hunks.
///
/// Two changes separated by `context_lines` or fewer unchanged lines share
/// a hunk; a strictly longer run of unchanged lines closes the hunk.
/// Leading context never reaches back into the previous hunk, so hunks are
/// non-overlapping and in ascending position order.
pub fn group_hunks(lines: &[DiffLine], context_lines: usize) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let n = lines.len();
    let mut idx = 0;
    let mut prev_end = 0;

    while idx < n {
        if !lines[idx].is_change() {
            idx += 1;
            continue;
        }

        // Extend across context runs no longer than the window.
        let mut last_change = idx;
        let mut scan = idx + 1;
        while scan < n {
            if lines[scan].is_change() {
                last_change = scan;
                scan += 1;
                continue;
            }
            let run_start = scan;
            while scan < n && !lines[scan].is_change() {
                scan += 1;
            }
            if scan == n || scan - run_start > context_lines {
                break;
            }
        }

        let start = idx.saturating_sub(context_lines).max(prev_end);
        let end = (last_change + context_lines + 1).min(n);
        hunks.push(build_hunk(lines, start, end));
        prev_end = end;
        idx = end;
    }

    hunks
}

fn build_hunk(lines: &[DiffLine], start: usize, end: usize) -> Hunk {
    let slice = &lines[start..end];
    let old_count = slice.iter().filter(|l| l.old_line.is_some()).count();
    let new_count = slice.iter().filter(|l| l.new_line.is_some()).count();

    // A side with no lines in the hunk anchors at the last position seen
    // before the hunk (0 at the top), with a zero count.
    let old_start = slice
        .iter()
        .find_map(|l| l.old_line)
        .unwrap_or_else(|| last_position_before(lines, start, |l| l.old_line));
    let new_start = slice
        .iter()
        .find_map(|l| l.new_line)
        .unwrap_or_else(|| last_position_before(lines, start, |l| l.new_line));

    Hunk {
        old_start,
        old_count,
        new_start,
        new_count,
        lines: slice.to_vec(),
    }
}

fn last_position_before(
    lines: &[DiffLine],
    start: usize,
    pos: impl Fn(&DiffLine) -> Option<usize>,
) -> usize {
    lines[..start].iter().rev().find_map(pos).unwrap_or(0)
}

/// Builds a [`DiffResult`] from grouped hunks.
pub(crate) fn summarize(hunks: Vec<Hunk>) -> DiffResult {
    let additions = hunks
        .iter()
        .flat_map(|h| &h.lines)
        .filter(|l| l.kind == DiffLineKind::Add)
        .count();
    let deletions = hunks
        .iter()
        .flat_map(|h| &h.lines)
        .filter(|l| l.kind == DiffLineKind::Remove)
        .count();
    DiffResult {
        hunks,
        additions,
        deletions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcs::diff_lines;

    #[test]
    fn identical_input_yields_no_hunks() {
        let script = diff_lines("a\nb\nc", "a\nb\nc");
        assert!(group_hunks(&script, 3).is_empty());
    }

    #[test]
    fn changes_within_the_window_share_a_hunk() {
        // Gap of exactly 3 context lines between the two changes.
        let old = "x\na\nb\nc\ny";
        let new = "q\na\nb\nc\nr";
        let script = diff_lines(old, new);
        let hunks = group_hunks(&script, 3);
        assert_eq!(hunks.len(), 1);
    }

    #[test]
    fn a_gap_longer_than_the_window_splits_hunks() {
        // Gap of 4 context lines, window of 3.
        let old = "x\na\nb\nc\nd\ny";
        let new = "q\na\nb\nc\nd\nr";
        let script = diff_lines(old, new);
        let hunks = group_hunks(&script, 3);
        assert_eq!(hunks.len(), 2);

        // Non-overlapping: the second hunk starts after the first ends.
        let first_last = hunks[0].old_start + hunks[0].old_count - 1;
        assert!(hunks[1].old_start > first_last);
    }

    #[test]
    fn context_truncates_at_sequence_boundaries() {
        let script = diff_lines("a\nb\nc", "x\nb\nc");
        let hunks = group_hunks(&script, 3);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].old_start, 1);
        // remove + add + two trailing context lines, nothing before line 1.
        assert_eq!(hunks[0].old_count, 3);
        assert_eq!(hunks[0].new_count, 3);
    }

    #[test]
    fn zero_context_hunks_contain_only_changes() {
        let script = diff_lines("a\nb\nc", "a\nx\nc");
        let hunks = group_hunks(&script, 0);
        assert_eq!(hunks.len(), 1);
        assert!(hunks[0].lines.iter().all(DiffLine::is_change));
        assert_eq!(hunks[0].old_start, 2);
        assert_eq!(hunks[0].old_count, 1);
        assert_eq!(hunks[0].new_start, 2);
        assert_eq!(hunks[0].new_count, 1);
    }

    #[test]
    fn pure_append_hunk_has_zero_old_count_at_zero_context() {
        let script = diff_lines("a\nb", "a\nb\nc\nd");
        let hunks = group_hunks(&script, 0);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].old_count, 0);
        // Anchored after the last old line.
        assert_eq!(hunks[0].old_start, 2);
        assert_eq!(hunks[0].new_start, 3);
        assert_eq!(hunks[0].new_count, 2);
    }

    #[test]
    fn summary_counts_only_changes() {
        let script = diff_lines("a\nb\nc", "a\nx\nc");
        let result = summarize(group_hunks(&script, 3));
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 1);
        assert_eq!(result.changes(), 2);
    }
}

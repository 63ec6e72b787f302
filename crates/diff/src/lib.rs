//! # Confluence Diff
//!
//! Deterministic, git-compatible unified diffs over line sequences.
//!
//! The engine is pure: no I/O, no failure modes, fully deterministic for
//! fixed inputs. It is built in three layers:
//!
//! - [`lcs`] - LCS alignment and line-level edit script
//! - [`hunk`] - grouping the edit script into context-bounded hunks
//! - [`render`] - unified-diff text output and change statistics
//!
//! ```
//! use confluence_diff::{diff, DiffOptions};
//!
//! let (text, result) = diff("a\nb\nc", "a\nx\nc", &DiffOptions::default());
//! assert_eq!(result.additions, 1);
//! assert_eq!(result.deletions, 1);
//! assert!(text.contains("-b"));
//! assert!(text.contains("+x"));
//! ```

mod hunk;
mod lcs;
mod render;

pub use hunk::{group_hunks, DiffResult, Hunk};
pub use lcs::{diff_lines, DiffLine, DiffLineKind};
pub use render::{diff, render_unified, stats, DiffOptions, DiffStats, NO_DIFFERENCES};

//! Line-count diffs via `--numstat`

use std::path::Path;

use super::runner::Git;
use crate::models::DiffStat;

/// One `--numstat` line: `<added> <deleted> <path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumstatEntry {
    pub stat: DiffStat,
    pub path: String,
}

/// Parse `--numstat` output.
///
/// Binary files report `-` for both counts; those count as zero. Lines with
/// fewer than three fields are skipped.
pub fn parse_numstat(output: &str) -> Vec<NumstatEntry> {
    output
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let (added, rest) = next_field(line)?;
            let (deleted, rest) = next_field(rest)?;
            let path = rest.trim();
            if path.is_empty() {
                return None;
            }
            Some(NumstatEntry {
                stat: DiffStat {
                    additions: parse_count(added),
                    deletions: parse_count(deleted),
                },
                path: path.to_string(),
            })
        })
        .collect()
}

/// Split off the first whitespace-delimited field, keeping the remainder intact
fn next_field(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    let end = text.find(char::is_whitespace)?;
    Some((&text[..end], &text[end..]))
}

fn parse_count(field: &str) -> u64 {
    field.parse().unwrap_or(0)
}

/// Sum the counts of a numstat listing
pub fn total(entries: &[NumstatEntry]) -> DiffStat {
    entries.iter().fold(DiffStat::default(), |mut acc, entry| {
        acc += entry.stat;
        acc
    })
}

impl Git {
    /// Lines added/deleted on `head` since it forked from `base` (`base...head`).
    ///
    /// Any failure yields zero/zero; the stats are cosmetic.
    pub fn diff_stats(&self, repo: &Path, base: &str, head: &str) -> DiffStat {
        let range = format!("{base}...{head}");
        self.run_optional(&["diff", "--numstat", &range], repo)
            .map(|stdout| total(&parse_numstat(&stdout)))
            .unwrap_or_default()
    }
}

//! `git log` record format
//!
//! Fields are separated by 0x01 and records by 0x00. Commit text may contain
//! any printable punctuation but never these control bytes.

use crate::models::Commit;

pub const FIELD_SEPARATOR: char = '\x01';
pub const RECORD_SEPARATOR: char = '\x00';

/// `--format` value producing `hash␁subject␁author␁date␁body␀`
pub const LOG_FORMAT: &str = "--format=%H%x01%s%x01%an%x01%ar%x01%b%x00";

/// Parse the output of `git log` run with [`LOG_FORMAT`].
///
/// Records with fewer than four fields are skipped. The body is optional.
pub fn parse_log(output: &str) -> Vec<Commit> {
    output
        .split(RECORD_SEPARATOR)
        .map(str::trim)
        .filter(|record| !record.is_empty())
        .filter_map(|record| {
            let fields: Vec<&str> = record.splitn(5, FIELD_SEPARATOR).collect();
            if fields.len() < 4 {
                tracing::debug!(record, "skipping malformed log record");
                return None;
            }
            Some(Commit {
                hash: fields[0].to_string(),
                subject: fields[1].to_string(),
                author: fields[2].to_string(),
                date: fields[3].to_string(),
                body: fields.get(4).map(|b| b.trim().to_string()).unwrap_or_default(),
                ..Default::default()
            })
        })
        .collect()
}

/// Parse newline-separated hashes (`--format=%H`)
pub fn parse_hashes(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

use std::sync::LazyLock;

use regex::Regex;

/// `RSS COMMAND` row: leading digits, whitespace, then the rest of the line.
static ROW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(.*)$").expect("row pattern is valid"));

/// One row of the process table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessRecord {
    pub resident_kb: u64,
    /// Command name as reported, may contain `/` and spaces.
    pub name: String,
}

impl ProcessRecord {
    pub fn new(resident_kb: u64, name: impl Into<String>) -> Self {
        Self {
            resident_kb,
            name: name.into(),
        }
    }
}

/// Parses `ps -axo rss,comm` output. The header line is skipped and rows that
/// do not fit the grammar are dropped.
pub fn parse_ps_output(output: &str) -> Vec<ProcessRecord> {
    let mut lines = output.trim().lines();
    lines.next();

    let mut dropped = 0usize;
    let records: Vec<ProcessRecord> = lines
        .filter_map(|line| {
            let record = parse_row(line);
            if record.is_none() {
                dropped += 1;
            }
            record
        })
        .collect();

    tracing::debug!(parsed = records.len(), dropped, "parsed process table");
    records
}

pub fn parse_row(line: &str) -> Option<ProcessRecord> {
    let caps = ROW_PATTERN.captures(line.trim())?;
    let resident_kb = caps[1].parse().ok()?;
    Some(ProcessRecord::new(resident_kb, &caps[2]))
}

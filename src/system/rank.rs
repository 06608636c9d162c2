use std::collections::HashMap;

use serde::Serialize;

use super::process::ProcessRecord;

pub const DEFAULT_LIMIT: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AggregatedProcess {
    pub name: String,
    pub total_resident_kb: u64,
}

/// Processes ordered by memory, largest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Ranking {
    pub entries: Vec<AggregatedProcess>,
    /// Sum over every aggregated name, not only the ranked ones.
    pub total_kb: u64,
}

impl Ranking {
    /// Denominator for bar lengths. Never zero.
    pub fn scale_max(&self) -> u64 {
        self.entries
            .first()
            .map(|p| p.total_resident_kb)
            .unwrap_or(1)
            .max(1)
    }
}

/// Sums resident memory per exact name. Zero-memory rows are skipped.
pub fn aggregate(records: &[ProcessRecord]) -> HashMap<String, u64> {
    let mut by_name: HashMap<String, u64> = HashMap::with_capacity(records.len());
    for record in records {
        if record.resident_kb == 0 {
            continue;
        }
        let total = by_name.entry(record.name.clone()).or_insert(0);
        *total = total.saturating_add(record.resident_kb);
    }
    by_name
}

pub fn rank(by_name: HashMap<String, u64>, limit: usize) -> Ranking {
    let _span = tracing::debug_span!("rank.build", names = by_name.len()).entered();

    let total_kb = by_name
        .values()
        .fold(0u64, |sum, &kb| sum.saturating_add(kb));

    let mut entries: Vec<AggregatedProcess> = by_name
        .into_iter()
        .map(|(name, total_resident_kb)| AggregatedProcess {
            name,
            total_resident_kb,
        })
        .collect();
    // Name order on ties keeps output stable between runs.
    entries.sort_by(|a, b| {
        b.total_resident_kb
            .cmp(&a.total_resident_kb)
            .then_with(|| a.name.cmp(&b.name))
    });
    entries.truncate(limit);

    Ranking { entries, total_kb }
}

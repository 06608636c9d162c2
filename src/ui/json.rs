use std::io::{self, Write};

use serde::Serialize;

use crate::app::Report;
use crate::system::rank::AggregatedProcess;

#[derive(Debug, Serialize)]
struct MemoryView {
    total_bytes: u64,
    used_bytes: u64,
    free_bytes: u64,
    used_percent: f64,
}

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    memory: MemoryView,
    total_process_kb: u64,
    processes: &'a [AggregatedProcess],
}

/// Machine-readable form of the report, pretty-printed.
pub fn render<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let view = ReportView {
        memory: MemoryView {
            total_bytes: report.memory.total_bytes,
            used_bytes: report.memory.used_bytes(),
            free_bytes: report.memory.free_bytes,
            used_percent: report.memory.used_percent(),
        },
        total_process_kb: report.ranking.total_kb,
        processes: &report.ranking.entries,
    };
    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out)
}

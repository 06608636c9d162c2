use std::io::{self, Write};

use super::RenderOptions;
use super::theme::{Gradient, Palette, Style};
use crate::format::{format_memory, smart_truncate_path};
use crate::system::rank::{AggregatedProcess, Ranking};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Bar of `length` cells, filled in proportion to `value / max`.
pub fn bar(value: u64, max: u64, length: usize, palette: &Palette, gradient: &Gradient) -> String {
    let ratio = value as f64 / max.max(1) as f64;
    let filled = ((ratio * length as f64).round() as usize).min(length);
    let empty = length - filled;

    format!(
        "{}{}{}{}{}",
        palette.code(gradient.style(ratio)),
        FILLED.repeat(filled),
        palette.code(Style::Dim),
        EMPTY.repeat(empty),
        palette.code(Style::Reset)
    )
}

pub fn row(process: &AggregatedProcess, max: u64, options: &RenderOptions) -> String {
    let palette = &options.palette;
    let layout = &options.layout;
    let reset = palette.code(Style::Reset);

    let bar = bar(
        process.total_resident_kb,
        max,
        layout.bar_len,
        palette,
        &options.gradient,
    );
    let memory = format_memory(process.total_resident_kb.saturating_mul(1024));
    let name = smart_truncate_path(&process.name, layout.name_width);

    format!(
        "{bar} {}{memory:>width$}{reset} {}{name}{reset}",
        palette.code(Style::Bright),
        palette.code(Style::Dim),
        width = layout.memory_width,
    )
}

pub fn render<W: Write>(out: &mut W, ranking: &Ranking, options: &RenderOptions) -> io::Result<()> {
    let max = ranking.scale_max();
    for process in &ranking.entries {
        writeln!(out, "{}", row(process, max, options))?;
    }

    if options.show_process_total {
        writeln!(
            out,
            "{}Total (all processes): {}{}",
            options.palette.code(Style::Dim),
            format_memory(ranking.total_kb.saturating_mul(1024)),
            options.palette.code(Style::Reset)
        )?;
    }
    Ok(())
}

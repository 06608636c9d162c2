pub mod chart;
pub mod header;
pub mod json;
pub mod layout;
pub mod theme;

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::system::rank::Ranking;
use crate::system::snapshot::MemorySnapshot;
use layout::ChartLayout;
use theme::{Gradient, Palette};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub layout: ChartLayout,
    pub palette: Palette,
    pub gradient: Gradient,
    pub clear_screen: bool,
    pub show_process_total: bool,
}

pub fn draw<W: Write>(
    out: &mut W,
    snapshot: &MemorySnapshot,
    ranking: &Ranking,
    options: &RenderOptions,
) -> io::Result<()> {
    let _span = tracing::debug_span!("ui.render", rows = ranking.entries.len()).entered();

    if options.clear_screen {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    header::render(out, snapshot, &options.palette)?;
    chart::render(out, ranking, options)?;
    out.flush()
}

#[cfg(test)]
mod tests;

use std::io::{self, Write};

use super::theme::{Palette, Style};
use crate::format::format_memory;
use crate::system::snapshot::MemorySnapshot;

const BOX_TOP: &str = "╭─────────── System Memory Usage ───────────╮";
const BOX_BOTTOM: &str = "╰───────────────────────────────────────────╯";
const SECTION_TITLE: &str = "=== Top Processes by Memory Usage ===";

/// Summary box with total, used and free memory, then the chart title.
pub fn render<W: Write>(out: &mut W, snapshot: &MemorySnapshot, palette: &Palette) -> io::Result<()> {
    let reset = palette.code(Style::Reset);
    let bright = palette.code(Style::Bright);
    let cyan = palette.code(Style::Cyan);

    writeln!(out)?;
    writeln!(out, "{bright}{cyan}{BOX_TOP}{reset}")?;
    writeln!(
        out,
        "{cyan}│{reset} Total Memory: {bright}{}{reset}",
        format_memory(snapshot.total_bytes)
    )?;
    writeln!(
        out,
        "{cyan}│{reset} Used Memory:  {}{}{reset} ({:.1}%)",
        palette.code(Style::Yellow),
        format_memory(snapshot.used_bytes()),
        snapshot.used_percent()
    )?;
    writeln!(
        out,
        "{cyan}│{reset} Free Memory:  {}{}{reset}",
        palette.code(Style::Green),
        format_memory(snapshot.free_bytes)
    )?;
    writeln!(out, "{cyan}{BOX_BOTTOM}")?;
    writeln!(out, "{reset}")?;
    writeln!(
        out,
        "{bright}{}{SECTION_TITLE}{reset}",
        palette.code(Style::Blue)
    )
}

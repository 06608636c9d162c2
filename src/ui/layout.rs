use std::io::IsTerminal;

use crate::config::LayoutConfig;

/// Column widths for one render, derived from the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub memory_width: usize,
    pub bar_len: usize,
    pub name_width: usize,
}

impl ChartLayout {
    /// The bar is sized against the nominal name width, while the name column
    /// gets whatever the clamped bar leaves over. The two only diverge once the
    /// bar hits its minimum.
    pub fn compute(terminal_width: usize, config: &LayoutConfig) -> Self {
        let width = terminal_width as i64;
        let fixed = config.memory_width as i64 + config.spacing as i64 + 2;

        let bar_len = (width - fixed - config.name_width as i64).max(config.min_bar as i64);
        let available = width - fixed - bar_len;

        ChartLayout {
            memory_width: config.memory_width,
            bar_len: bar_len as usize,
            name_width: available.max(0) as usize,
        }
    }
}

/// Columns of stdout, or `fallback` when stdout is not a terminal.
pub fn terminal_width(fallback: usize) -> usize {
    if !std::io::stdout().is_terminal() {
        return fallback;
    }
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => usize::from(cols),
        _ => fallback,
    }
}

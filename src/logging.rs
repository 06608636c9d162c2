use color_eyre::eyre::{Result, eyre};
use tracing::Level;

/// Installs a stderr subscriber. Nothing is logged when `verbosity` is zero
/// and `json` is off, so the chart output stays untouched.
pub fn init(verbosity: u8, json: bool) -> Result<()> {
    if verbosity == 0 && !json {
        return Ok(());
    }

    let level = match verbosity {
        0 | 1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false);

    let result = if json {
        tracing::subscriber::set_global_default(builder.with_ansi(false).json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_mode_installs_nothing() {
        assert!(init(0, false).is_ok());
    }
}

use crate::config::Config;
use crate::system::rank::{Ranking, aggregate, rank};
use crate::system::sampler::{ProcessSource, SamplerError};
use crate::system::snapshot::MemorySnapshot;
use crate::ui::RenderOptions;
use crate::ui::layout::ChartLayout;
use crate::ui::theme::{ColorChoice, Gradient, Palette};

/// Everything one run renders.
#[derive(Debug, Clone)]
pub struct Report {
    pub memory: MemorySnapshot,
    pub ranking: Ranking,
}

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        App { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Samples the process table once and ranks it by name.
    pub async fn collect<S: ProcessSource>(
        &self,
        source: &mut S,
        memory: MemorySnapshot,
    ) -> Result<Report, SamplerError> {
        let records = source.sample().await?;
        let ranking = rank(aggregate(&records), self.config.general.top);

        tracing::info!(
            records = records.len(),
            ranked = ranking.entries.len(),
            total_kb = ranking.total_kb,
            "collected process snapshot"
        );

        Ok(Report { memory, ranking })
    }

    pub fn render_options(&self, terminal_width: usize, stdout_is_terminal: bool) -> RenderOptions {
        let general = &self.config.general;
        RenderOptions {
            layout: ChartLayout::compute(terminal_width, &self.config.layout),
            palette: Palette::for_choice(
                ColorChoice::from_config_str(&general.color),
                stdout_is_terminal,
            ),
            gradient: Gradient::from(&self.config.thresholds),
            clear_screen: general.clear_screen,
            show_process_total: general.show_process_total,
        }
    }
}

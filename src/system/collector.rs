use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use super::process::ProcessRecord;
use super::sampler::{ProcessSource, SamplerError};
use super::snapshot::MemorySnapshot;

/// Reads the process table through `sysinfo` instead of spawning `ps`.
pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Collector { sys: System::new() }
    }

    pub fn memory(&mut self) -> MemorySnapshot {
        self.sys.refresh_memory();
        MemorySnapshot::from_system(&self.sys)
    }

    pub fn records(&mut self) -> Vec<ProcessRecord> {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        self.sys
            .processes()
            .values()
            .map(|process| {
                ProcessRecord::new(
                    process.memory() / 1024,
                    process.name().to_string_lossy().to_string(),
                )
            })
            .collect()
    }
}

impl ProcessSource for Collector {
    async fn sample(&mut self) -> Result<Vec<ProcessRecord>, SamplerError> {
        Ok(self.records())
    }
}

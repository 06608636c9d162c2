use serde::Serialize;
use sysinfo::System;

/// Physical memory totals at one point in time, in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

impl MemorySnapshot {
    pub fn read() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        Self::from_system(&sys)
    }

    /// Free means available to new allocations, reclaimable cache included.
    pub fn from_system(sys: &System) -> Self {
        Self {
            total_bytes: sys.total_memory(),
            free_bytes: sys.available_memory(),
        }
    }

    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    pub fn used_percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        self.used_bytes() as f64 / self.total_bytes as f64 * 100.0
    }
}

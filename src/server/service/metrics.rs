//! Live host readings for the status page.

use std::{sync::Arc, time::Instant};

use sysinfo::System;
use tokio::sync::Mutex;

use crate::server::model::stats::HostMetrics;

/// Shared sampler of CPU and memory usage.
///
/// CPU usage is computed between consecutive refreshes, so the same `System` is kept
/// for the lifetime of the server and shared by every request.
#[derive(Clone)]
pub struct MetricsSampler {
    system: Arc<Mutex<System>>,
    started_at: Instant,
}

impl Default for MetricsSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSampler {
    /// Creates a sampler and takes the baseline CPU reading.
    ///
    /// Uptime is measured from this call.
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        system.refresh_memory();

        Self {
            system: Arc::new(Mutex::new(system)),
            started_at: Instant::now(),
        }
    }

    /// Takes a fresh reading.
    ///
    /// # Returns
    /// - `HostMetrics` - CPU percent, RAM used percent, uptime and process id
    pub async fn sample(&self) -> HostMetrics {
        let mut system = self.system.lock().await;
        system.refresh_cpu_usage();
        system.refresh_memory();

        let total_memory = system.total_memory();
        let ram_usage = if total_memory == 0 {
            0.0
        } else {
            (system.used_memory() as f64 / total_memory as f64 * 100.0) as f32
        };

        HostMetrics {
            cpu_load: system.global_cpu_usage(),
            ram_usage,
            uptime_seconds: self.started_at.elapsed().as_secs(),
            process_id: std::process::id(),
        }
    }
}

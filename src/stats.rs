use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks simulation throughput between reports
pub struct Throughput {
    generation: u64,
    alive: usize,
    gens_in_report: u64,
    last_report: Instant,
}
impl Throughput {
    pub fn new(generation: u64, alive: usize) -> Self {
        Self {
            generation,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    /// Records the state after a tick
    pub fn record(&mut self, generation: u64, alive: usize) {
        self.gens_in_report += generation.saturating_sub(self.generation);
        self.generation = generation;
        self.alive = alive;
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!("{:.02}gen/s alive:{}", gens_per_sec, self.alive)
    }
}

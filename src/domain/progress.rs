use log::info;

/// Track progress of tournament page fetching
pub struct FetchProgress {
    total: usize,
    fetched: usize,
    cached: usize,
    failed: usize,
}

impl FetchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            fetched: 0,
            cached: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, was_cached: bool) {
        if was_cached {
            self.cached += 1;
        } else {
            self.fetched += 1;
        }
        self.log_progress();
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.fetched + self.cached + self.failed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if current % 10 == 0 || current == self.total {
            info!(
                "  → Progress: {}/{} ({} new, {} cached, {} failed)",
                current, self.total, self.fetched, self.cached, self.failed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_outcome() {
        let mut progress = FetchProgress::new(3);

        progress.record(true);
        progress.record(false);
        progress.record_failure();

        assert_eq!(progress.current_count(), 3);
        assert_eq!(progress.failed(), 1);
    }
}

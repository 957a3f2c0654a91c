/// One line of progress: the best tour length seen in a single iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRecord {
    /// 1-based.
    pub iteration: usize,
    pub best_tour_length: f64,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Continue {
    Yes,
    No,
}

/// Receives progress records as each iteration completes. Returning
/// [`Continue::No`] stops the run once the current iteration is finished.
pub trait ProgressSink {
    fn on_progress(&mut self, record: &ProgressRecord) -> Continue;
}

impl<F> ProgressSink for F
where
    F: FnMut(&ProgressRecord) -> Continue,
{
    fn on_progress(&mut self, record: &ProgressRecord) -> Continue {
        self(record)
    }
}

/// Best tour seen over a whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub iterations_completed: usize,
    /// Empty when no iteration ran.
    pub best_tour: Vec<usize>,
    /// `f64::MAX` when no iteration ran.
    pub best_tour_length: f64,
}

// src/progress.rs
/// Progress reporting for the enrichment pass, the only stage that waits on the network.
/// The CLI draws a bar; library callers pass `None` or `NullProgress`.
pub trait Progress {
    /// Number of records about to be looked up.
    fn begin(&mut self, _total: usize) {}

    /// Status text, e.g. the current stage.
    fn log(&mut self, _msg: &str) {}

    /// Record enriched, from cache or a fresh fetch.
    fn item_done(&mut self, _id: u32, _name: &str) {}

    /// Record left with default fields.
    fn item_failed(&mut self, _id: u32, _name: &str) {}

    /// Pass over, whatever the outcome.
    fn finish(&mut self) {}
}

/// Discards everything.
pub struct NullProgress;
impl Progress for NullProgress {}

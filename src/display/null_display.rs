use super::{DisplaySink, RenderSnapshot};
use crate::error::CalcResult;

/// No-op display used by tests and headless engine usage.
///
/// It records what was presented so tests can assert on exactly what a real
/// backend would have received.
#[derive(Debug, Default)]
pub struct NullDisplay {
    pub presented_count: usize,
    pub last_snapshot: Option<RenderSnapshot>,
}

impl DisplaySink for NullDisplay {
    fn present(&mut self, snapshot: &RenderSnapshot) -> CalcResult<()> {
        self.presented_count += 1;
        self.last_snapshot = Some(snapshot.clone());
        Ok(())
    }
}

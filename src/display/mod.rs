mod null_display;
mod snapshot;

pub use null_display::NullDisplay;
pub use snapshot::RenderSnapshot;

use crate::error::CalcResult;

/// Contract implemented by any display backend.
///
/// Sinks receive a fully materialized snapshot after every handled event, so
/// presentation code stays isolated from the state machine and is never
/// consulted for state decisions.
pub trait DisplaySink {
    fn present(&mut self, snapshot: &RenderSnapshot) -> CalcResult<()>;
}

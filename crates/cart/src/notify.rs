//! Notice observer seam.
//!
//! Operations on the cart emit at most one [`Notice`] describing their
//! outcome. Emission is decoupled from the mutation logic through this trait
//! so the store is testable without a UI dependency.

use figurine_market_core::Notice;

/// Observer for notices emitted by cart operations.
pub trait Notifier {
    /// Called with each emitted notice.
    fn notify(&self, notice: &Notice);
}

/// Notifier that forwards notices to the `tracing` subscriber.
///
/// Error notices are recovered conditions (a missed lookup, not a failure of
/// the store), so they log at `warn`, not `error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        if notice.is_error() {
            tracing::warn!(kind = ?notice.kind, "{}", notice.text);
        } else {
            tracing::info!(kind = ?notice.kind, "{}", notice.text);
        }
    }
}

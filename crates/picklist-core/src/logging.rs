//! Logging facilities for Picklist.
//!
//! Picklist uses the `tracing` crate for instrumentation. Libraries never
//! install a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("picklist=debug,picklist_core=info")
//!         .init();
//! }
//! ```

/// Operation names recorded by [`PerfSpan`].
pub mod span_names {
    /// Re-sort of an observed list.
    pub const SETTLE: &str = "settle";
}

/// Target names for log filtering.
///
/// Every event and span in Picklist uses one of these, so that directives like
/// `picklist::ordering=debug` select one subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "picklist_core::signal";
    /// Deferred dispatch target.
    pub const DISPATCH: &str = "picklist_core::dispatch";
    /// [`PerfSpan`](super::PerfSpan) target.
    pub const PERF: &str = "picklist::perf";
    /// List ordering target.
    pub const ORDERING: &str = "picklist::ordering";
    /// Selection filter target.
    pub const SELECTION: &str = "picklist::selection";
    /// Control-level target (command dispatch, configuration).
    pub const COMBO: &str = "picklist::combo";
}

/// Keeps a `debug` span (target `picklist::perf`) entered until dropped.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a span recording `name` as the operation.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new(span_names::SETTLE);
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::SIGNAL, targets::DISPATCH] {
            assert!(target.starts_with("picklist_core::"));
        }
        for target in [targets::PERF, targets::ORDERING, targets::SELECTION, targets::COMBO] {
            assert!(target.starts_with("picklist::"));
        }
    }
}

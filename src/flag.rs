use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Enables the debug-gated dumps (`log_byte` and `log_bytes`).
///
/// Shared between loggers through an `Arc`. Nothing else is published
/// through the flag so relaxed ordering is enough.
#[derive(Debug)]
pub struct DebugFlag(AtomicBool);

lazy_static! {
    static ref GLOBAL: Arc<DebugFlag> = Arc::new(DebugFlag::default());
}

impl DebugFlag {
    pub const fn new(enabled: bool) -> Self {
        DebugFlag(AtomicBool::new(enabled))
    }

    /// The process-wide flag, enabled at startup.
    pub fn global() -> Arc<DebugFlag> {
        GLOBAL.clone()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }

    pub fn enable(&self) {
        self.set(true);
    }

    pub fn disable(&self) {
        self.set(false);
    }
}

impl Default for DebugFlag {
    fn default() -> Self {
        DebugFlag::new(true)
    }
}

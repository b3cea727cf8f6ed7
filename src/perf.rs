//! Performance instrumentation for hot paths.
//!
//! Pointer handling and hit testing run on every mouse move, so they are
//! wrapped in `profile_scope!`. With the `profiling` feature each scope is
//! timed by a [`ScopedTimer`] that emits a `trace!` event and warns when a
//! threshold is exceeded. Without the feature the macro compiles to nothing.
//!
//! ```ignore
//! fn handle_pointer_move() {
//!     profile_scope!("handle_pointer_move");
//!     // ... event handling code ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{trace, warn};

/// Default warning threshold for profiled scopes (one 60 FPS frame)
pub const DEFAULT_THRESHOLD_MS: f64 = 16.67;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_THRESHOLD_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer that reports its scope's duration when dropped.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                scope = self.name,
                elapsed_ms,
                threshold_ms = self.threshold_ms,
                "Slow operation"
            );
        } else {
            trace!(scope = self.name, elapsed_ms, "Scope timing");
        }
    }
}

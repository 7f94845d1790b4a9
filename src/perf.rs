//! Performance instrumentation for gesture handling.
//!
//! Pointer handlers and hit testing are wrapped in [`profile_scope!`]. With
//! the `profiling` feature the scope is timed by a [`ScopedTimer`] that logs
//! through `tracing`; without it the macro compiles to nothing.
//!
//! ```ignore
//! fn handle_pointer_move(&mut self) {
//!     profile_scope!("handle_pointer_move");
//!     // ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{trace, warn};

/// Budget for a single pointer event at 60 FPS
pub const TARGET_EVENT_MS: f64 = 16.67;

/// Runtime switch; only meaningful with the `profiling` feature
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
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

pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Times a scope and reports it when dropped.
///
/// Scopes slower than the threshold are logged at `warn`; the rest at
/// `trace` while profiling is enabled.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the per-event budget as threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, TARGET_EVENT_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        } else if is_profiling_enabled() {
            trace!(operation = self.name, elapsed_ms = format!("{:.3}", ms), "timed");
        }
    }
}

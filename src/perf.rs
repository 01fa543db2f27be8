//! Performance instrumentation for the pointer-event hot paths.
//!
//! Enable with the `profiling` feature; without it the macros compile to
//! nothing.

use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::{trace, warn};

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that logs its scope's duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, TARGET_FRAME_MS)
    }

    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1_000.0;
        #[cfg(feature = "profiling")]
        if elapsed_ms > self.threshold_ms {
            warn!(scope = self.name, elapsed_ms, "slow scope");
        } else {
            trace!(scope = self.name, elapsed_ms, "scope timing");
        }
        #[cfg(not(feature = "profiling"))]
        let _ = (self.name, self.threshold_ms, elapsed_ms);
    }
}

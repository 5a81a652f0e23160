//! Build progress observable.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared fractional completion of the current build, in `[0, 1]`.
///
/// The fraction is stored as f64 bits in one atomic cell; clones share the
/// cell, so a UI may poll the fraction from one thread while the builder
/// writes it from another.
#[derive(Debug, Clone, Default)]
pub struct ProgressMeter {
    bits: Arc<AtomicU64>,
}

impl ProgressMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fraction.
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Store a new fraction, clamped to `[0, 1]`.
    pub fn set(&self, fraction: f64) {
        self.bits
            .store(fraction.clamp(0.0, 1.0).to_bits(), Ordering::Release);
    }

    /// Back to zero.
    pub fn reset(&self) {
        self.bits.store(0f64.to_bits(), Ordering::Release);
    }
}

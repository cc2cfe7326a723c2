use rand::Rng;

/// Source of randomness for id generation and outcome sampling.
///
/// Injected wherever a draw happens so tests can script exact values
/// instead of relying on the test-mode flag alone.
pub trait RandomSource: Send + Sync {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Uniform integer draw in `[lo, hi]` inclusive.
    fn next_in_range(&self, lo: u64, hi: u64) -> u64;
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn next_in_range(&self, lo: u64, hi: u64) -> u64 {
        if hi <= lo {
            return lo;
        }
        rand::thread_rng().gen_range(lo..=hi)
    }
}

//! Operation counters for profiling image algorithms.
//!
//! Two counters are kept per thread:
//!
//! - `pixmem` - incremented once per [`GrayImage::get`](crate::GrayImage::get)
//!   or [`GrayImage::set`](crate::GrayImage::set) call, and by bulk loaders
//!   for every pixel they move
//! - `comparisons` - incremented once per pixel equality test performed by
//!   sub-image matching
//!
//! Counters are thread-local, so images processed on different threads never
//! disturb each other's numbers. They are pure side-channel data: no
//! operation reads them back.
//!
//! With the `instrument` feature disabled every counting function compiles
//! to nothing and [`snapshot`] always reads zero.
//!
//! # Usage
//!
//! ```rust
//! use gray8_core::{instrument, GrayImage};
//!
//! let mut img = GrayImage::new(4, 4, 255).unwrap();
//! let ((), counters, _elapsed) = instrument::measure(|| {
//!     img.set(1, 2, 7);
//!     let _ = img.get(1, 2);
//! });
//! # #[cfg(feature = "instrument")]
//! assert_eq!(counters.pixmem, 2);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

#[cfg(feature = "instrument")]
use std::cell::Cell;

#[cfg(feature = "instrument")]
thread_local! {
    static PIXMEM: Cell<u64> = const { Cell::new(0) };
    static COMPARISONS: Cell<u64> = const { Cell::new(0) };
}

/// A snapshot of the counters of the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Pixel memory accesses (reads and writes).
    pub pixmem: u64,
    /// Pixel comparisons made while matching sub-images.
    pub comparisons: u64,
}

impl Counters {
    /// Returns the counts accumulated since `earlier` was taken.
    pub fn since(&self, earlier: &Counters) -> Counters {
        Counters {
            pixmem: self.pixmem.saturating_sub(earlier.pixmem),
            comparisons: self.comparisons.saturating_sub(earlier.comparisons),
        }
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pixmem={} comparisons={}", self.pixmem, self.comparisons)
    }
}

/// Records `n` pixel memory accesses.
#[inline]
pub fn count_pixel_access(n: u64) {
    #[cfg(feature = "instrument")]
    PIXMEM.with(|c| c.set(c.get().wrapping_add(n)));
    #[cfg(not(feature = "instrument"))]
    let _ = n;
}

/// Records `n` pixel comparisons.
#[inline]
pub fn count_comparison(n: u64) {
    #[cfg(feature = "instrument")]
    COMPARISONS.with(|c| c.set(c.get().wrapping_add(n)));
    #[cfg(not(feature = "instrument"))]
    let _ = n;
}

/// Zeroes both counters of the current thread.
pub fn reset() {
    #[cfg(feature = "instrument")]
    {
        PIXMEM.with(|c| c.set(0));
        COMPARISONS.with(|c| c.set(0));
    }
}

/// Reads the counters of the current thread.
pub fn snapshot() -> Counters {
    #[cfg(feature = "instrument")]
    {
        Counters {
            pixmem: PIXMEM.with(Cell::get),
            comparisons: COMPARISONS.with(Cell::get),
        }
    }
    #[cfg(not(feature = "instrument"))]
    {
        Counters::default()
    }
}

/// Runs `f` and reports the counters it accumulated together with the
/// elapsed wall time.
///
/// Counters are not reset, so nested measurements see their own deltas.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Counters, Duration) {
    let before = snapshot();
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, snapshot().since(&before), elapsed)
}

#[cfg(all(test, feature = "instrument"))]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        reset();
        count_pixel_access(3);
        count_pixel_access(2);
        count_comparison(7);
        assert_eq!(
            snapshot(),
            Counters {
                pixmem: 5,
                comparisons: 7
            }
        );
        reset();
        assert_eq!(snapshot(), Counters::default());
    }

    #[test]
    fn test_measure_reports_delta() {
        count_pixel_access(100);
        let (value, counters, _) = measure(|| {
            count_pixel_access(4);
            count_comparison(1);
            42
        });
        assert_eq!(value, 42);
        assert_eq!(counters.pixmem, 4);
        assert_eq!(counters.comparisons, 1);
    }

    #[test]
    fn test_counters_are_per_thread() {
        reset();
        count_pixel_access(10);
        let other = std::thread::spawn(|| {
            count_pixel_access(1);
            snapshot().pixmem
        })
        .join()
        .unwrap();
        assert_eq!(other, 1);
        assert_eq!(snapshot().pixmem, 10);
    }

    #[test]
    fn test_display() {
        let c = Counters {
            pixmem: 12,
            comparisons: 3,
        };
        assert_eq!(c.to_string(), "pixmem=12 comparisons=3");
    }
}

#[cfg(all(test, not(feature = "instrument")))]
mod disabled_tests {
    use super::*;

    #[test]
    fn test_counting_is_noop() {
        count_pixel_access(5);
        count_comparison(2);
        let ((), counters, _) = measure(|| count_pixel_access(9));
        assert_eq!(counters, Counters::default());
        assert_eq!(snapshot(), Counters::default());
    }
}

//! Times merge-insertion sort over the contiguous and the double-ended container.
//!
//! Filling the containers and assembling the [`Report`] happen outside the measured interval,
//! only the sort call itself is timed. Events are emitted before and after the measured call,
//! never inside it, so a verbose subscriber does not inflate the timings.

use std::collections::VecDeque;
use std::env;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::containers::{deque, vec};
use crate::sequence::Sequence;
use crate::Sort;

/// Environment variable that switches [`HarnessConfig::from_env`] to parallel runs.
pub const PARALLEL_ENV_VAR: &str = "MERGE_INSERTION_PARALLEL";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Run the two containers on separate threads. Each run still owns a private copy of the
    /// input and only times its own sort call.
    pub parallel: bool,
}

impl HarnessConfig {
    /// Parallel if `MERGE_INSERTION_PARALLEL` is set to anything but `0`, `false` or empty.
    pub fn from_env() -> Self {
        Self {
            parallel: flag_enabled(env::var(PARALLEL_ENV_VAR).ok().as_deref()),
        }
    }
}

/// Elapsed wall-clock time of a single sort call.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub container: String,
    pub len: usize,
    pub micros: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Output of the contiguous run.
    pub sorted: Vec<u32>,
    /// Output of the double-ended run, equal to `sorted`.
    pub deque_sorted: VecDeque<u32>,
    pub vec: Measurement,
    pub deque: Measurement,
}

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration(test_fn: impl FnOnce()) -> Duration {
    let start = Instant::now();

    test_fn();

    start.elapsed()
}

/// Copies `values` into the container of `S` and times sorting it.
pub fn timed_sort<S: Sort>(values: &[u32]) -> (S::Seq<u32>, Measurement) {
    let mut seq = <S::Seq<u32>>::from_items(values.iter().copied());
    let container = S::name();
    trace!(container = %container, len = values.len(), "sort run starting");

    let elapsed = measure_duration(|| S::sort(&mut seq));

    let measurement = Measurement {
        container,
        len: values.len(),
        micros: as_micros(elapsed),
    };
    debug!(
        container = %measurement.container,
        len = measurement.len,
        micros = measurement.micros,
        "sort run finished"
    );

    (seq, measurement)
}

pub fn compare(values: &[u32]) -> Report {
    compare_with(values, HarnessConfig::default())
}

pub fn compare_with(values: &[u32], config: HarnessConfig) -> Report {
    let ((sorted, vec), (deque_sorted, deque)) = if config.parallel {
        thread::scope(|s| {
            let deque_run = s.spawn(|| timed_sort::<deque::SortImpl>(values));
            let vec_run = timed_sort::<vec::SortImpl>(values);

            match deque_run.join() {
                Ok(deque_run) => (vec_run, deque_run),
                Err(payload) => panic::resume_unwind(payload),
            }
        })
    } else {
        (
            timed_sort::<vec::SortImpl>(values),
            timed_sort::<deque::SortImpl>(values),
        )
    };

    debug_assert!(sorted.iter().eq(deque_sorted.iter()));

    info!(
        len = values.len(),
        parallel = config.parallel,
        vec_us = vec.micros,
        deque_us = deque.micros,
        "container comparison finished"
    );

    Report {
        sorted,
        deque_sorted,
        vec,
        deque,
    }
}

fn as_micros(elapsed: Duration) -> f64 {
    // Uses f64 to keep sub-microsecond precision.
    elapsed.as_nanos() as f64 / 1_000.0
}

fn flag_enabled(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(v) => !v.eq_ignore_ascii_case("false"),
    }
}

//! Timing harness.
//!
//! For each requested size `n` the harness builds one input instance, invokes
//! the target exactly once, and records the elapsed wall-clock time. One
//! sample per size, no warm-up, no repeats, no outlier rejection; the fitter
//! is expected to tolerate the resulting noise.
//!
//! Sizes are echoed in request order and `times[i]` pairs with `sizes[i]`.
//! A panic in the target propagates out of the harness uncaught: a crashing
//! target aborts estimation for that target (isolation across targets is the
//! pipeline's job, not the harness's).

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::domain::Measurements;
use crate::error::AppError;

/// A target callable: consumes one input instance, return value discarded.
///
/// This is a plain function pointer (`Send + 'static` and unwind-safe) so the
/// same target can be driven with or without the watchdog timeout.
pub type TargetFn = fn(&[u64]);

/// Default instance policy: the first `n` non-negative integers.
pub fn default_instance(n: u64) -> Vec<u64> {
    (0..n).collect()
}

/// Measure `target` at each requested size using the default instance policy.
pub fn measure<F>(target: F, sizes: &[u64]) -> Measurements
where
    F: Fn(&[u64]),
{
    measure_with(target, sizes, default_instance)
}

/// Measure `target` with a caller-supplied instance builder.
pub fn measure_with<F, B>(target: F, sizes: &[u64], build: B) -> Measurements
where
    F: Fn(&[u64]),
    B: Fn(u64) -> Vec<u64>,
{
    let mut times = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let instance = build(n);
        let start = Instant::now();
        target(&instance);
        let elapsed = start.elapsed().as_secs_f64();
        debug!("measured size={n} elapsed={elapsed:.9}s");
        times.push(elapsed);
    }
    Measurements {
        sizes: sizes.to_vec(),
        times,
    }
}

/// Measure `target` against pre-built instances.
///
/// The reported size of each measurement is the instance length, in the order
/// the instances were supplied.
pub fn measure_prebuilt<F>(target: F, instances: &[Vec<u64>]) -> Measurements
where
    F: Fn(&[u64]),
{
    let mut sizes = Vec::with_capacity(instances.len());
    let mut times = Vec::with_capacity(instances.len());
    for instance in instances {
        let n = instance.len() as u64;
        let start = Instant::now();
        target(instance);
        let elapsed = start.elapsed().as_secs_f64();
        debug!("measured size={n} elapsed={elapsed:.9}s");
        sizes.push(n);
        times.push(elapsed);
    }
    Measurements { sizes, times }
}

/// Measure with a per-invocation watchdog timeout.
///
/// Each invocation runs on a fresh worker thread; if it does not report back
/// within `timeout` the harness returns a "target did not complete" error.
/// The stuck worker cannot be killed and is left detached — acceptable for a
/// measurement tool, since the process exits shortly after.
///
/// A panic on the worker is re-raised on the calling thread, preserving the
/// fail-fast contract of the plain `measure` path.
pub fn measure_with_timeout(
    target: TargetFn,
    sizes: &[u64],
    timeout: Duration,
) -> Result<Measurements, AppError> {
    let mut times = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let instance = default_instance(n);
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            let start = Instant::now();
            target(&instance);
            let _ = tx.send(start.elapsed());
        });

        match rx.recv_timeout(timeout) {
            Ok(elapsed) => {
                let _ = handle.join();
                let elapsed = elapsed.as_secs_f64();
                debug!("measured size={n} elapsed={elapsed:.9}s");
                times.push(elapsed);
            }
            Err(RecvTimeoutError::Disconnected) => {
                // Sender dropped without reporting: the worker panicked.
                match handle.join() {
                    Err(payload) => std::panic::resume_unwind(payload),
                    Ok(()) => {
                        return Err(AppError::new(
                            4,
                            format!("Measurement worker exited without reporting at size {n}."),
                        ));
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                return Err(AppError::new(
                    5,
                    format!(
                        "Target did not complete within {}ms at size {n}.",
                        timeout.as_millis()
                    ),
                ));
            }
        }
    }

    Ok(Measurements {
        sizes: sizes.to_vec(),
        times,
    })
}

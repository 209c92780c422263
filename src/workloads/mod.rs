//! Built-in demonstration workloads.
//!
//! The estimator core consumes an explicit name → callable mapping; this
//! module provides the built-in entries and resolves CLI names against them.
//! There is no reflection or dynamic loading: a workload is a plain function
//! pointer registered under a static name.
//!
//! Each workload consumes one input instance (by default the first `n`
//! non-negative integers, in ascending order) and performs work whose cost
//! scales with the class it is named after. `std::hint::black_box` keeps the
//! optimizer from deleting the work.

use std::hint::black_box;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::AppError;
use crate::measure::TargetFn;

/// Number of probes per invocation of the logarithmic workload. A single
/// binary search is far below timer resolution, so we repeat a fixed count;
/// a size-independent constant preserves the O(log n) shape.
const LOG_PROBES: u64 = 4096;

/// Seed for the linearithmic workload's input shuffle. Fixed so repeated
/// runs sort the same permutation.
const SHUFFLE_SEED: u64 = 0x5eed_0b16;

/// A named built-in workload.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadSpec {
    pub name: &'static str,
    pub summary: &'static str,
    pub run: TargetFn,
}

/// Workloads run by a bare `bigo run`.
///
/// `cubic` is deliberately excluded: at the default sizes the triple scan
/// takes minutes. It stays available by name.
pub const DEFAULT_WORKLOADS: [&str; 5] = [
    "constant",
    "logarithmic",
    "linear",
    "linearithmic",
    "quadratic",
];

static REGISTRY: [WorkloadSpec; 6] = [
    WorkloadSpec {
        name: "constant",
        summary: "fixed amount of work, independent of input size",
        run: constant_probe,
    },
    WorkloadSpec {
        name: "logarithmic",
        summary: "repeated binary search over the (sorted) input",
        run: logarithmic_probe,
    },
    WorkloadSpec {
        name: "linear",
        summary: "single pass summing every element",
        run: linear_probe,
    },
    WorkloadSpec {
        name: "linearithmic",
        summary: "sort of a deterministically shuffled copy",
        run: linearithmic_probe,
    },
    WorkloadSpec {
        name: "quadratic",
        summary: "pairwise scan over all element pairs",
        run: quadratic_probe,
    },
    WorkloadSpec {
        name: "cubic",
        summary: "triple nested scan (use small --sizes)",
        run: cubic_probe,
    },
];

/// All built-in workloads, in registry order.
pub fn registry() -> &'static [WorkloadSpec] {
    &REGISTRY
}

/// Resolve requested workload names, preserving request order.
///
/// An empty request resolves to `DEFAULT_WORKLOADS`.
pub fn resolve(names: &[String]) -> Result<Vec<&'static WorkloadSpec>, AppError> {
    let requested: Vec<&str> = if names.is_empty() {
        DEFAULT_WORKLOADS.to_vec()
    } else {
        names.iter().map(String::as_str).collect()
    };

    let mut out = Vec::with_capacity(requested.len());
    for name in requested {
        let spec = REGISTRY.iter().find(|w| w.name == name).ok_or_else(|| {
            let available: Vec<&str> = REGISTRY.iter().map(|w| w.name).collect();
            AppError::new(
                3,
                format!(
                    "Unknown workload '{name}'. Available: {}.",
                    available.join(", ")
                ),
            )
        })?;
        out.push(spec);
    }
    Ok(out)
}

fn constant_probe(_input: &[u64]) {
    let mut acc = 0u64;
    for i in 0..256u64 {
        acc = acc.wrapping_add(black_box(i).wrapping_mul(31));
    }
    black_box(acc);
}

fn logarithmic_probe(input: &[u64]) {
    let max = input.len().max(1) as u64;
    for k in 0..LOG_PROBES {
        let key = (k.wrapping_mul(31)) % max;
        black_box(input.binary_search(&key)).ok();
    }
}

fn linear_probe(input: &[u64]) {
    let mut acc = 0u64;
    for &v in input {
        acc = acc.wrapping_add(black_box(v));
    }
    black_box(acc);
}

fn linearithmic_probe(input: &[u64]) {
    let mut work = input.to_vec();
    let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
    work.shuffle(&mut rng);
    work.sort_unstable();
    black_box(work);
}

fn quadratic_probe(input: &[u64]) {
    let mut acc = 0u64;
    for &a in input {
        for &b in input {
            acc ^= black_box(a).wrapping_mul(b);
        }
    }
    black_box(acc);
}

fn cubic_probe(input: &[u64]) {
    let mut acc = 0u64;
    for &a in input {
        for &b in input {
            for &c in input {
                acc = acc.wrapping_add(black_box(a ^ b ^ c));
            }
        }
    }
    black_box(acc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::default_instance;

    #[test]
    fn registry_names_are_unique() {
        let names: Vec<&str> = registry().iter().map(|w| w.name).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn empty_request_resolves_default_set() {
        let specs = resolve(&[]).unwrap();
        let names: Vec<&str> = specs.iter().map(|w| w.name).collect();
        assert_eq!(names, DEFAULT_WORKLOADS.to_vec());
    }

    #[test]
    fn resolve_preserves_request_order() {
        let names = vec!["quadratic".to_string(), "constant".to_string()];
        let specs = resolve(&names).unwrap();
        assert_eq!(specs[0].name, "quadratic");
        assert_eq!(specs[1].name, "constant");
    }

    #[test]
    fn unknown_workload_is_rejected_with_listing() {
        let err = resolve(&["bogus".to_string()]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("linearithmic"));
    }

    #[test]
    fn every_workload_runs_on_small_instances() {
        let instance = default_instance(32);
        for w in registry() {
            (w.run)(&instance);
            (w.run)(&[]); // empty instances must not panic either
        }
    }
}

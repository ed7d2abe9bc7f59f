//! Brute-force pair and triple sum searches.
//!
//! Both searches walk the full cross product of the report with itself:
//! an entry may be combined with itself (twice for pairs, up to three
//! times for triples). The first match in ascending-index order wins.

use tracing::debug;

/// Error type for combination searches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinderError {
    /// Exhaustive search completed without a match.
    #[error("no {size}-element combination sums to {target}")]
    NoSolution {
        /// Combination size that was searched (2 or 3).
        size: usize,
        /// Sum the combination was required to reach.
        target: i64,
    },
}

/// Find the first pair summing to `target` and return its product.
///
/// Iterates the full cross product in ascending-index order (outer index
/// ascending, then inner), so an entry paired with itself is a legal
/// match: a report containing `target / 2` yields its square.
pub fn pair_product(report: &[i64], target: i64) -> Result<i64, FinderError> {
    for &l in report {
        for &r in report {
            if l + r == target {
                debug!(l, r, product = l * r, "pair found");
                return Ok(l * r);
            }
        }
    }
    Err(FinderError::NoSolution { size: 2, target })
}

/// Find the first triple summing to `target` and return its product.
///
/// Same cross-product contract as [`pair_product`], generalized to three
/// nested ascending-index iterations.
pub fn triple_product(report: &[i64], target: i64) -> Result<i64, FinderError> {
    for &a in report {
        for &b in report {
            for &c in report {
                if a + b + c == target {
                    debug!(a, b, c, product = a * b * c, "triple found");
                    return Ok(a * b * c);
                }
            }
        }
    }
    Err(FinderError::NoSolution { size: 3, target })
}

/// Trait for combination finders, consumed by the application layer.
pub trait Finder: std::fmt::Debug {
    /// Search `report` for a combination summing to `target`.
    fn solve(&self, report: &[i64], target: i64) -> Result<i64, FinderError>;

    /// Get the name of this finder.
    fn name(&self) -> &'static str;
}

/// Two-element sum finder (part one).
#[derive(Debug)]
pub struct PairFinder;

impl Finder for PairFinder {
    fn solve(&self, report: &[i64], target: i64) -> Result<i64, FinderError> {
        pair_product(report, target)
    }

    fn name(&self) -> &'static str {
        "pair"
    }
}

/// Three-element sum finder (part two).
#[derive(Debug)]
pub struct TripleFinder;

impl Finder for TripleFinder {
    fn solve(&self, report: &[i64], target: i64) -> Result<i64, FinderError> {
        triple_product(report, target)
    }

    fn name(&self) -> &'static str {
        "triple"
    }
}

//! Finder selection by part name.

use crate::finder::{Finder, PairFinder, TripleFinder};

/// Error type for finder selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The part name is not recognized.
    #[error("unknown part {0:?} (expected \"one\", \"two\", or \"all\")")]
    UnknownPart(String),
}

/// Map a part name to the finders to run, in run order.
pub fn finders_for_part(part: &str) -> Result<Vec<Box<dyn Finder>>, RegistryError> {
    match part {
        "one" => Ok(vec![Box::new(PairFinder)]),
        "two" => Ok(vec![Box::new(TripleFinder)]),
        "all" => Ok(vec![Box::new(PairFinder), Box::new(TripleFinder)]),
        other => Err(RegistryError::UnknownPart(other.to_string())),
    }
}

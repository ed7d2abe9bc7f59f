//! Error handling and exit codes.

use report_repair_core::constants::exit_codes;
use report_repair_core::{FinderError, InputError, RegistryError};

/// Map an application error to its process exit code.
///
/// Downcasts through the `anyhow` chain so context wrapping does not hide
/// the underlying kind.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<FinderError>().is_some() {
        exit_codes::ERROR_NO_SOLUTION
    } else if err.downcast_ref::<InputError>().is_some() {
        exit_codes::ERROR_INPUT
    } else if err.downcast_ref::<RegistryError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}

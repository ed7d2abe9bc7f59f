//! CLI result presenter.

use std::time::Duration;

use crate::output::format_duration;

/// Console presenter for finder results.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a found product for one part.
    pub fn present_solution(&self, part: &str, target: i64, product: i64, duration: Duration) {
        if self.quiet {
            println!("{product}");
            return;
        }

        println!("{part}: {product}");
        if self.verbose {
            println!("  target: {target}");
            println!("  duration: {}", format_duration(duration));
        }
    }
}

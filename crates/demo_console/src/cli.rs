//! Command-line interface for `demo_console`.
//!
//! # Examples
//!
//! ```bash
//! # Run the interactive console
//! demo_console
//!
//! # Reproducible catalog, smaller pages
//! demo_console --seed 7 --page-size 5
//!
//! # Render one frame to stdout and exit (for CI)
//! demo_console --headless --plain
//! ```

use clap::Parser;

/// Exam-catalog admin console built on the trellis data grid.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "demo_console",
    version,
    about = "Exam-catalog admin console built on the trellis data grid"
)]
pub struct Cli {
    /// Seed for deterministic catalog generation
    ///
    /// Using the same seed produces an identical catalog, useful for
    /// reproducible demos and testing
    #[arg(long, short = 's', default_value_t = 42, env = "DEMO_SEED")]
    pub seed: u64,

    /// Number of records in the generated catalog
    #[arg(long, default_value_t = 23, env = "DEMO_RECORDS")]
    pub records: usize,

    /// Rows per page
    #[arg(long, default_value_t = 10, env = "DEMO_PAGE_SIZE")]
    pub page_size: usize,

    /// Render one frame to stdout and exit instead of entering the
    /// interactive loop
    #[arg(long)]
    pub headless: bool,

    /// Disable colors and text attributes
    #[arg(long, env = "NO_COLOR")]
    pub plain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["demo_console"]);
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.records, 23);
        assert_eq!(cli.page_size, 10);
        assert!(!cli.headless);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "demo_console",
            "--seed",
            "7",
            "--page-size",
            "5",
            "--headless",
            "--plain",
        ]);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.page_size, 5);
        assert!(cli.headless);
        assert!(cli.plain);
    }
}

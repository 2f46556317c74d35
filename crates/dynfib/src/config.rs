//! Driver configuration from CLI flags and environment.

use clap::Parser;

use dynfib_core::constants::{DEFAULT_CAPACITY, DEFAULT_INDEX};
use dynfib_core::{FibError, MAX_FIB_INDEX, MIN_CAPACITY};

/// dynfib — move a memoized Fibonacci cache between owners and check it survives.
#[derive(Parser, Debug, Clone)]
#[command(name = "dynfib", version, about)]
pub struct AppConfig {
    /// Capacity of the caches built by the driver.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY, env = "DYNFIB_CAPACITY")]
    pub capacity: usize,

    /// Index queried at every step.
    #[arg(short, long, default_value_t = DEFAULT_INDEX, env = "DYNFIB_INDEX")]
    pub index: usize,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only output the value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Check that the capacity is buildable and the index fits inside it
    /// and inside the `u64` range.
    pub fn validate(&self) -> Result<(), FibError> {
        if self.capacity < MIN_CAPACITY {
            return Err(FibError::Config(format!(
                "capacity must be at least {MIN_CAPACITY}, got {}",
                self.capacity
            )));
        }
        if self.index >= self.capacity {
            return Err(FibError::Config(format!(
                "index {} must be below capacity {}",
                self.index, self.capacity
            )));
        }
        if self.index > MAX_FIB_INDEX {
            return Err(FibError::Config(format!(
                "index {} is past F({MAX_FIB_INDEX}), the largest value that fits in u64",
                self.index
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            index: DEFAULT_INDEX,
            json: false,
            quiet: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("dynfib").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_driver_sequence() {
        let config = parse(&[]);
        assert_eq!(config.capacity, 12);
        assert_eq!(config.index, 10);
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn short_and_long_flags() {
        let config = parse(&["-c", "40", "--index", "39", "--json", "-v"]);
        assert_eq!(config.capacity, 40);
        assert_eq!(config.index, 39);
        assert!(config.json);
        assert!(config.verbose);
    }

    #[test]
    fn validate_rejects_index_at_capacity() {
        let config = AppConfig {
            capacity: 12,
            index: 12,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(FibError::Config(_))));
    }

    #[test]
    fn validate_rejects_small_capacity() {
        for capacity in [0, 1] {
            let config = AppConfig {
                capacity,
                index: 0,
                ..AppConfig::default()
            };
            assert!(matches!(config.validate(), Err(FibError::Config(_))));
        }
    }

    #[test]
    fn validate_rejects_unrepresentable_index() {
        let config = AppConfig {
            capacity: 500,
            index: 94,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(FibError::Config(_))));
    }

    #[test]
    fn validate_accepts_extremes() {
        let config = AppConfig {
            capacity: 94,
            index: 93,
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
        let config = AppConfig {
            capacity: 500,
            index: 93,
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
        let config = AppConfig {
            capacity: 2,
            index: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}

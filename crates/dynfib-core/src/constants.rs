//! Capacity limits, reference values and exit codes.

/// Smallest capacity a cache can be built with (slots for F(0) and F(1)).
pub const MIN_CAPACITY: usize = 2;

/// Largest Fibonacci index whose value fits in a `u64`.
/// F(93) = 12200160415121876738
pub const MAX_FIB_INDEX: usize = 93;

/// Number of Fibonacci values representable in a `u64`, F(0)..=F(93).
pub const FIB_TABLE_LEN: usize = MAX_FIB_INDEX + 1;

/// Capacity used by the driver when none is configured.
pub const DEFAULT_CAPACITY: usize = 12;

/// Index queried by the driver when none is configured.
pub const DEFAULT_INDEX: usize = 10;

/// Capacity of the instance the driver overwrites by move assignment.
pub const REPLACED_CAPACITY: usize = 6;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; FIB_TABLE_LEN] = {
    let mut table = [0u64; FIB_TABLE_LEN];
    table[1] = 1;
    let mut i = 2;
    while i < FIB_TABLE_LEN {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the `dynfib` driver.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A cache contract was violated (out of capacity, moved-from access).
    pub const ERROR_CONTRACT: i32 = 2;
    /// A driver step produced an unexpected observation.
    pub const ERROR_SCENARIO: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

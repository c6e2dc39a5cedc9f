/// Pockets on a single-zero (European) wheel: 0 through 36.
pub const EUROPEAN_POCKETS: u8 = 37;

/// Red numbers on a roulette wheel.
pub const RED_NUMBERS: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

/// Straight-number payout (35:1, excludes the original stake).
pub const STRAIGHT_PAYOUT: f64 = 35.0;

/// Even-money payout for color bets.
pub const EVEN_MONEY_PAYOUT: f64 = 1.0;

/// Reduced straight payout used by the house-favoring number wheel.
pub const TWEAKED_STRAIGHT_PAYOUT: f64 = 34.8;

/// Reduced GREEN payout used by the house-favoring color wheel.
pub const TWEAKED_GREEN_PAYOUT: f64 = 14.0;

/// Probability mass the house-favoring number wheel puts on zero.
pub const TWEAKED_ZERO_PROBABILITY: f64 = 0.05;

/// RED/BLACK probability on the house-favoring color wheel (GREEN takes the rest).
pub const TWEAKED_COLOR_PROBABILITY: f64 = 0.47;

/// Allowed distance between a wheel's probability sum and 1.0.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Default sanity ceiling on rounds per simulation.
pub const MAX_ROUNDS: u64 = 1_000_000;

/// Largest ceiling a caller may configure.
pub const ROUND_LIMIT: u64 = 10_000_000;

/// Dashboard defaults.
pub const DEFAULT_TARGET_NUMBER: u8 = 17;
pub const DEFAULT_STAKE: f64 = 100.0;
pub const DEFAULT_ROUNDS: u64 = 10_000;
pub const DEFAULT_STARTING_BALANCE: f64 = 1_000.0;

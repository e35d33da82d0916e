// src/config/consts.rs

// Scoring
pub const DEFAULT_Z: f64 = 2.576; // ~99.5% one-sided
pub const DEFAULT_PRIOR_VOTES: u64 = 25;
pub const DEFAULT_PRIOR_RATING: f64 = 6.5;

// Report
pub const DEFAULT_PAGE_SIZE: usize = 200;
pub const DEFAULT_MIN_YEAR: i32 = 2025;
pub const DEFAULT_OUTPUT: &str = "index.html";
pub const DETAILS_PREFIX: &str = "details-";
pub const GAME_URL_PREFIX: &str = "https://boardgamegeek.com/boardgame/";

// Input discovery
pub const DEFAULT_INPUT_DIR: &str = ".";
pub const INPUT_PATTERN: &str = "20*.csv";
pub const SNAPSHOT_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

// Catalog
pub const API_BASE: &str = "https://api.geekdo.com/xmlapi2";
pub const USER_AGENT: &str = concat!("bgg_rank/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const REQUEST_PAUSE_MS: u64 = 1000; // API rate limit

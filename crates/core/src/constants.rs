use std::time::Duration;

/// Budget shared by the fetch and persist stages of one request.
pub const DEFAULT_REQUEST_BUDGET: Duration = Duration::from_millis(200);

/// File overwritten with the latest bid after every stored quote.
pub const DEFAULT_MIRROR_FILE: &str = "cotacao.txt";

/// Decimal places used when writing the bid to the mirror file.
pub const MIRROR_DECIMAL_PRECISION: u32 = 2;

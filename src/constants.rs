// USPS API endpoints. The address endpoint uses GET and expects its
// parameters as query strings per the Addresses v3 resource.
pub const USPS_TOKEN_URL: &str = "https://apis.usps.com/oauth2/v3/token";
pub const USPS_ADDRESS_API_URL: &str = "https://apis.usps.com/addresses/v3/address";

/// OAuth2 scope granting access to the Addresses v3 resources.
pub const OAUTH_SCOPE: &str = "addresses";

// Batch processing defaults
pub const DEFAULT_BATCH_SIZE: usize = 2;
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1_000;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Directory input files are resolved against and output is written to.
pub const DATA_DIR: &str = "data";

/// Output table filename, written inside the data directory.
pub const OUTPUT_FILE: &str = "validated_addresses.csv";

/// Spreadsheet extensions rejected with a corrective message instead of
/// being parsed as CSV.
pub const EXCEL_EXTENSIONS: [&str; 5] = [".xlsx", ".xlsm", ".xls", ".xltx", ".xltm"];

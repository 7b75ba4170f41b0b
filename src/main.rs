use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, warn};

use address_validator::apis::usps::UspsAddressApi;
use address_validator::auth::TokenClient;
use address_validator::config::{Config, Credentials};
use address_validator::error::Result;
use address_validator::input;
use address_validator::pipeline::Pipeline;
use address_validator::report::{self, RunSummary};
use address_validator::{constants, logging};

#[derive(Parser)]
#[command(name = "address_validator")]
#[command(about = "Bulk mailing-address validator backed by the USPS Addresses v3 API")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input CSV filename (include .csv), resolved against the data folder
    filename: String,

    /// Directory the input file is resolved against and output is written to
    #[arg(long, default_value = constants::DATA_DIR)]
    data_dir: PathBuf,

    /// Records per batch (overrides config.toml)
    #[arg(long)]
    batch_size: Option<usize>,

    /// Pause between batches in milliseconds (overrides config.toml)
    #[arg(long)]
    delay_ms: Option<u64>,
}

async fn run(cli: Cli) -> Result<RunSummary> {
    let config = Config::load()?;
    let credentials = Credentials::from_env()?;

    // Reject bad input before spending any remote calls
    let records = input::load_input_csv(&cli.data_dir, &cli.filename)?;
    println!("📄 Loaded {} records from '{}'", records.len(), cli.filename);

    let timeout = Duration::from_secs(config.usps.timeout_seconds);

    println!("\n🔑 Requesting access token...");
    let token_client = TokenClient::new(&config.usps.token_url, timeout)?;
    let credential = token_client.acquire(&credentials).await?;

    let token_lifetime = Duration::from_secs(credential.expires_in);
    let run_started = std::time::Instant::now();

    let api = UspsAddressApi::new(&config.usps.address_url, credential, timeout)?;

    let batch_size = cli.batch_size.unwrap_or(config.usps.batch_size);
    let delay = Duration::from_millis(cli.delay_ms.unwrap_or(config.usps.delay_ms));

    let results = Pipeline::run(&api, &records, batch_size, delay).await;

    // The token is never refreshed mid-run; past its lifetime, per-record
    // auth failures surface as ordinary invalid rows
    if !token_lifetime.is_zero() && run_started.elapsed() > token_lifetime {
        warn!(
            "Run outlasted the token lifetime of {}s; late failures may be expired-credential errors",
            token_lifetime.as_secs()
        );
    }

    let output_path = cli.data_dir.join(constants::OUTPUT_FILE);
    let summary = report::finalize(&results, &output_path)?;

    println!("\n--- Sample of validated data (first 5 rows) ---");
    for result in results.iter().take(5) {
        println!(
            "   {} | valid: {} | full_zip4: {}",
            result.key, result.is_valid, result.full_zip4
        );
    }

    Ok(summary)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(summary) => {
            println!(
                "\n✅ Validation complete. Results saved to '{}'",
                summary.output_file
            );
            println!("   Total records: {}", summary.total);
            println!("   Valid: {}", summary.valid);
            println!("   Invalid: {}", summary.invalid);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use ferrous_splitdns_application::use_cases::SyncRequest;
use ferrous_splitdns_domain::{CliOverrides, Config};
use ferrous_splitdns_infrastructure::storage::load_token;
use std::process::ExitCode;
use tracing::{error, info};

mod bootstrap;
mod di;
mod summary;

use summary::RunSummary;

const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser, Debug)]
#[command(name = "ferrous-splitdns")]
#[command(version)]
#[command(about = "Build an AdGuard Home split-DNS upstream list from domain rule sets")]
struct Cli {
    /// Resolvers for domestic domains (default: 114.114.114.114)
    #[arg(value_name = "DOMESTIC_DNS")]
    domestic: Vec<String>,

    /// Resolvers for foreign domains (default: 8.8.8.8)
    #[arg(short = 'f', long, value_name = "ADDR", num_args = 1..)]
    foreign: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Root directory for downloaded, converted and merged files
    #[arg(short = 'o', long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Bearer token file, relative to the output directory
    #[arg(long, value_name = "FILE")]
    token_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Abort when the release metadata lookup fails
    #[arg(long)]
    strict_metadata: bool,

    /// Skip the release metadata lookup and download from the mirror only
    #[arg(long, conflicts_with = "strict_metadata")]
    mirror_only: bool,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            output_dir: self.output_dir.clone(),
            token_file: self.token_file.clone(),
            log_level: self.log_level.clone(),
            domestic_resolvers: self.domestic.clone(),
            foreign_resolvers: self.foreign.clone(),
            strict_metadata: self.strict_metadata,
            mirror_only: self.mirror_only,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tokio::select! {
        result = run(cli) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Run failed");
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted by user");
            ExitCode::from(EXIT_INTERRUPTED)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    if let Some(path) = cli.write_config.as_deref() {
        config.save(path)?;
        println!("Configuration written to {}", path);
        return Ok(());
    }

    bootstrap::init_logging(&config);
    bootstrap::log_config(&config, cli.config.as_deref());

    info!("Starting Ferrous SplitDNS v{}", env!("CARGO_PKG_VERSION"));

    let request = build_request(&config).await?;
    let services = di::Services::new(&config).await?;

    let report = services.sync.execute(&request).await?;

    if !report.fetch.all_delivered() {
        eprintln!(
            "Warning: only {}/{} files downloaded, continuing with the files present",
            report.fetch.delivered(),
            report.fetch.total()
        );
    }

    let summary = RunSummary::collect(
        services.store.as_ref(),
        &request.registry,
        &report,
        config.summary.preview_lines,
    )
    .await;
    print!("{}", summary.render(&request.domestic, &request.foreign));

    info!(unique = report.merge.unique, "Done");
    Ok(())
}

async fn build_request(config: &Config) -> anyhow::Result<SyncRequest> {
    let token = load_token(&config.output.token_path()).await;

    Ok(SyncRequest {
        registry: config.registry()?,
        domestic: config.domestic_resolvers()?,
        foreign: config.foreign_resolvers()?,
        token,
        strict_metadata: config.fetch.strict_metadata,
        mirror_only: config.fetch.mirror_only,
    })
}

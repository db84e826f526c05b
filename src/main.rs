//! Domain Hunt - find available domain names from dictionary words

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use domain_hunt::{
    cli::Cli,
    report::Reporter,
    search::{dictionary_pool, CancelToken, WordSource},
    AvailabilityOracle, DomainSearch, StopReason,
};

/// Conventional exit status after SIGINT
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    // Initialize the library
    if let Err(e) = domain_hunt::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("❌ Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let result = runtime.block_on(run(cli));
    // An abandoned DNS lookup can still hold a blocking thread; don't wait for it.
    runtime.shutdown_background();

    match result {
        Ok(StopReason::Cancelled) => ExitCode::from(EXIT_INTERRUPTED),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<domain_hunt::DomainHuntError>() {
                Some(err) => eprintln!("{}", err.user_message()),
                None => eprintln!("❌ Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

/// Main search workflow
async fn run(cli: Cli) -> anyhow::Result<StopReason> {
    let search_config = cli.search_config()?;
    let check_config = cli.check_config()?;
    let mut reporter = Reporter::new(cli.report_config());

    let corpus = WordSource::load(&cli.corpus_source()).context("Failed to load word list")?;
    let dictionary = dictionary_pool(corpus, &search_config);
    tracing::info!(
        words = dictionary.len(),
        tlds = ?search_config.tlds,
        count = search_config.count,
        "Starting domain search"
    );

    let cancel = CancelToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupt received, stopping search");
            on_interrupt.cancel();
        }
    });

    let oracle = AvailabilityOracle::from_config(&check_config);
    let mut search = DomainSearch::new(oracle, search_config)?.with_cancel_token(cancel);

    let outcome = search
        .run(dictionary, |event| reporter.on_event(event))
        .await;

    reporter.print_summary(&outcome)?;
    Ok(outcome.stop_reason)
}

//! CLI entry point for verified stripe swap submissions

use clap::Parser;
use log::{error, info};
use stripeswap::io::challenge::TerminalResponder;
use stripeswap::io::cli::{Cli, FileProcessor};

fn main() -> stripeswap::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let responder = TerminalResponder::new(std::io::stdin().lock(), std::io::stderr());
    let mut processor = FileProcessor::new(cli, responder);

    let outcome = processor.process()?;

    for report in &outcome.reports {
        info!(
            "{}: original {}, histogram {}, result {}",
            report.id,
            report.paths.original.display(),
            report.paths.histogram.display(),
            report.paths.result.display()
        );
    }

    for failure in &outcome.failures {
        error!("{}: {}", failure.path.display(), failure.error);
    }

    outcome
        .failures
        .into_iter()
        .next()
        .map_or(Ok(()), |failure| Err(failure.error))
}

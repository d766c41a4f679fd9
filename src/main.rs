//! Court of Cosmic Justice CLI

use clap::Parser;
use cosmic_court::config::CourtConfig;
use cosmic_court::error::{CourtError, Result};
use cosmic_court::session::{Console, Court, Outcome};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "cosmic-court")]
#[command(about = "Present your problem to Judge AstraLex and receive a lawful ruling")]
#[command(version)]
struct Cli {
    /// Seed for a reproducible court
    #[arg(long)]
    seed: Option<u64>,

    /// Preside with this persona instead of drawing one
    #[arg(long)]
    persona: Option<String>,

    /// JSON file overriding the court's tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read revised rulings without the dramatic pause
    #[arg(long)]
    no_pause: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the courtroom transcript
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {}", err);
    }

    std::panic::set_hook(Box::new(|panic| {
        error!("session panicked: {}", panic);
    }));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => return conclude(Outcome::Fault(CourtError::from(err))),
    };

    let outcome = runtime.block_on(preside(cli));
    // The session thread may still be blocked on stdin after an interrupt
    runtime.shutdown_background();

    conclude(outcome)
}

fn conclude(outcome: Outcome) -> ExitCode {
    match &outcome {
        Outcome::Adjourned(adjournment) => info!(?adjournment, "court adjourned"),
        Outcome::Interrupted => info!("court interrupted"),
        Outcome::Fault(err) => error!(error = %err, "court fault"),
    }
    if let Some(message) = outcome.closing_message() {
        println!("{}", message);
    }

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn open_court(cli: &Cli) -> Result<Court> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading court config: {}", path.display());
            CourtConfig::load(path)?
        }
        None => CourtConfig::default(),
    };
    if cli.no_pause {
        config.appeal_pause_ms = 0;
    }

    Court::open(&config, cli.persona.as_deref(), cli.seed)
}

/// Run the blocking console session, racing it against Ctrl-C
async fn preside(cli: Cli) -> Outcome {
    let mut court = match open_court(&cli) {
        Ok(court) => court,
        Err(err) => return Outcome::Fault(err),
    };

    let mut session = tokio::task::spawn_blocking(move || {
        // Stdout stays unlocked between writes so the interrupt path can still print
        let mut console = Console::new(std::io::stdin().lock(), std::io::stdout());
        console.run(&mut court)
    });

    let signal = tokio::select! {
        joined = &mut session => return Outcome::settle(joined),
        signal = tokio::signal::ctrl_c() => signal,
    };

    match signal {
        Ok(()) => Outcome::Interrupted,
        Err(err) => {
            warn!(error = %err, "cannot listen for interrupts");
            Outcome::settle(session.await)
        }
    }
}

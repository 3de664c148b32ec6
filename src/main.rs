use std::{io, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use resume_scorer::{
    config::DEFAULT_MISSING_LIMIT, ErrorReport, MatchReport, Matcher, Result, ScoringConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the resume (PDF or plain text)
    resume_path: PathBuf,

    /// Job description text
    job_description: String,

    /// Also report job skills missing from the resume
    #[arg(long, default_value = "false")]
    detailed: bool,

    /// Maximum number of missing skills to report
    #[arg(long, default_value_t = DEFAULT_MISSING_LIMIT)]
    missing_limit: usize,

    /// Stem terms before vectorizing
    #[arg(long, default_value = "false")]
    stem: bool,

    /// Use logarithmic term frequency
    #[arg(long, default_value = "false")]
    sublinear_tf: bool,

    /// Keep stop words and job-posting boilerplate
    #[arg(long, default_value = "false")]
    keep_stop_words: bool,

    /// Custom skill catalogue, one `Name: alias, alias` per line
    #[arg(long)]
    skills: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<&Args> for ScoringConfig {
    fn from(args: &Args) -> Self {
        Self {
            stop_words: !args.keep_stop_words,
            stem: args.stem,
            sublinear_tf: args.sublinear_tf,
            detailed: args.detailed,
            missing_limit: args.missing_limit,
            skills_path: args.skills.clone(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut stdout = io::stdout().lock();

    match run(&args) {
        Ok(report) => match report.write_to(&mut stdout) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            tracing::error!("{e}");
            if let Err(write_err) = ErrorReport::from(&e).write_to(&mut stdout) {
                tracing::error!("{write_err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<MatchReport> {
    let matcher = Matcher::new(ScoringConfig::from(args))?;
    matcher.score_resume_file(&args.resume_path, &args.job_description)
}

/// Logs go to stderr so stdout only ever carries the JSON record.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

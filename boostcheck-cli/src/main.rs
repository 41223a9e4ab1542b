mod config;

use anyhow::Context;
use boostcheck_core::adapters::{FsManifestWriter, RecordingNotifier, StaticConfirmer};
use boostcheck_core::{
    cli_version_from_invocation, run_check, run_recognize, CheckError, CheckSettings, Confirmer,
    FsRepoView, Notifier, PreflightError,
};
use boostcheck_types::report::{CheckReport, ReportStatus, Resolution, RunInfo, ToolInfo};
use boostcheck_types::{schema, SemanticVersion};
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::{Parser, Subcommand};
use config::OutputFormat;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(
    name = "boostcheck",
    version,
    about = "Preflight project and version checks for Booster framework tooling."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the project and reconcile its Booster version with this CLI.
    Check(CheckArgs),
    /// Verify only that the directory is a Booster project.
    Recognize(RecognizeArgs),
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Project root (default: current directory).
    #[arg(long, default_value = ".")]
    project_dir: Utf8PathBuf,

    /// Host-CLI user agent to take the tool version from
    /// (e.g. "@boostercloud/cli/1.11.2 darwin-x64 node-v12.10.0").
    #[arg(long, env = "BOOSTER_USER_AGENT")]
    user_agent: Option<String>,

    /// Answer the upgrade prompt affirmatively without asking.
    #[arg(long, default_value_t = false, conflicts_with = "non_interactive")]
    yes: bool,

    /// Never prompt; decline any upgrade offer (CI mode).
    #[arg(long, default_value_t = false)]
    non_interactive: bool,

    /// Output format (text, json).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Parser)]
struct RecognizeArgs {
    /// Project root (default: current directory).
    #[arg(long, default_value = ".")]
    project_dir: Utf8PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Recognize(args) => cmd_recognize(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Terminal yes/no prompt. Defaults to "no": the accepted branch rewrites
/// the project manifest, so an empty answer must not mutate anything.
#[derive(Debug, Clone, Copy, Default)]
struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, question: &str) -> anyhow::Result<bool> {
        print!("{question} [y/N] ");
        io::stdout().flush().context("flush stdout")?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .context("read confirmation answer")?;
        let answer = input.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Prints informational messages straight to the user.
#[derive(Debug, Clone, Copy, Default)]
struct TermNotifier;

impl Notifier for TermNotifier {
    fn info(&self, message: &str) {
        println!("{message}");
    }
}

fn cmd_check(args: CheckArgs) -> Result<(), PreflightError> {
    let file_config =
        config::load_or_default(&args.project_dir).context("load boostcheck.toml config")?;
    let merged = config::merge_check_args(&file_config, args.non_interactive, args.format);
    debug!(
        non_interactive = merged.non_interactive,
        format = ?merged.format,
        "merged config"
    );

    let cli_version = match &args.user_agent {
        Some(user_agent) => cli_version_from_invocation(user_agent)?,
        None => own_version()?,
    };

    let settings = CheckSettings {
        project_dir: args.project_dir.clone(),
        cli_version,
    };
    let repo = FsRepoView::new(args.project_dir.clone());
    let writer = FsManifestWriter::new(args.project_dir.clone());

    let confirmer: Box<dyn Confirmer> = if args.yes {
        Box::new(StaticConfirmer(true))
    } else if merged.non_interactive {
        Box::new(StaticConfirmer(false))
    } else {
        Box::new(StdinConfirmer)
    };

    let started_at = Utc::now();
    match merged.format {
        OutputFormat::Text => {
            let outcome = run_check(&settings, &repo, confirmer.as_ref(), &TermNotifier, &writer)?;
            println!("Booster project:  {}", args.project_dir);
            println!("CLI version:      {}", outcome.cli_version);
            println!("Project version:  {}", outcome.project_version);
            println!("Resolution:       {}", resolution_label(outcome.resolution));
        }
        OutputFormat::Json => {
            let recorder = RecordingNotifier::new();
            let outcome = run_check(&settings, &repo, confirmer.as_ref(), &recorder, &writer)?;
            let status = if outcome.resolution == Resolution::PatchDrift {
                ReportStatus::Warn
            } else {
                ReportStatus::Pass
            };
            let report = CheckReport {
                schema: schema::BOOSTCHECK_REPORT_V1.to_string(),
                tool: ToolInfo {
                    name: "boostcheck".to_string(),
                    version: Some(env!("CARGO_PKG_VERSION").to_string()),
                },
                run: RunInfo {
                    run_id: Some(Uuid::new_v4()),
                    started_at: Some(started_at),
                    ended_at: Some(Utc::now()),
                },
                project_dir: args.project_dir.to_string(),
                cli_version: outcome.cli_version,
                project_version: outcome.project_version,
                status,
                resolution: outcome.resolution,
                messages: recorder.messages(),
            };
            let rendered =
                serde_json::to_string_pretty(&report).context("serialize check report")?;
            println!("{rendered}");
        }
    }
    Ok(())
}

fn cmd_recognize(args: RecognizeArgs) -> Result<(), PreflightError> {
    let repo = FsRepoView::new(args.project_dir.clone());
    run_recognize(&repo)?;
    println!("{} is the root of a Booster project", args.project_dir);
    Ok(())
}

fn own_version() -> Result<SemanticVersion, PreflightError> {
    env!("CARGO_PKG_VERSION")
        .parse()
        .map_err(|e| PreflightError::Check(CheckError::MalformedVersion(e)))
}

fn resolution_label(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::UpToDate => "up to date",
        Resolution::PatchDrift => "patch drift (safe to proceed)",
        Resolution::DependenciesUpgraded => "project dependencies upgraded",
    }
}

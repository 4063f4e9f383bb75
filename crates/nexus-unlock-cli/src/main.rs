// crates/nexus-unlock-cli/src/main.rs
// ============================================================================
// Module: Nexus Unlock CLI Entry Point
// Description: Command dispatcher for the unlock validation harness.
// Purpose: Run the validation sweep, render the summary, and map exit codes.
// Dependencies: clap, nexus-unlock-core, thiserror, tokio
// ============================================================================

//! ## Overview
//! The nexus-unlock CLI runs the endpoint checklist validation against a
//! configured dashboard instance, streams the live transcript to stdout, and
//! writes the JSON report file. All user-facing strings are routed through
//! the i18n catalog. Exit codes: 0 full unlock, 1 partial unlock, 2 user
//! interrupt, 3 unhandled failure.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use nexus_unlock_cli::i18n::Locale;
use nexus_unlock_cli::i18n::set_locale;
use nexus_unlock_cli::t;
use nexus_unlock_core::TestResult;
use nexus_unlock_core::TranscriptSink;
use nexus_unlock_core::UnlockValidator;
use nexus_unlock_core::ValidationReport;
use nexus_unlock_core::ValidatorConfig;
use thiserror::Error;
use tokio::sync::oneshot;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable selecting the output language.
const LANG_ENV: &str = "NEXUS_UNLOCK_LANG";

/// Separator line framing the banner and the summary block.
const SEPARATOR: &str = "==================================================";

/// Exit code for a run that was interrupted by the user.
const EXIT_INTERRUPTED: u8 = 2;

/// Exit code for a run that failed with an unhandled error.
const EXIT_FAILED: u8 = 3;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "nexus-unlock", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `NEXUS_UNLOCK_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full unlock validation sweep (default).
    Validate(ValidateCommand),
}

/// Arguments for the validation run.
#[derive(Args, Debug, Default)]
struct ValidateCommand {
    /// Base URL of the dashboard under validation.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Optional config file path (defaults to nexus-unlock.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output path for the JSON report (overwritten each run).
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

/// CLI language selection values.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_failure(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let command = cli.command.unwrap_or(Commands::Validate(ValidateCommand::default()));
    match command {
        Commands::Validate(command) => command_validate(command).await,
    }
}

// ============================================================================
// SECTION: Validate Command
// ============================================================================

/// Executes the `validate` command.
async fn command_validate(command: ValidateCommand) -> CliResult<ExitCode> {
    let mut config = ValidatorConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("validate.config.load_failed", error = err)))?;
    apply_overrides(&mut config, &command);

    stdout_line(&t!("validate.init"))?;
    stdout_line(&t!("validate.banner"))?;
    stdout_line(SEPARATOR)?;

    let receiver = spawn_validation(config.clone(), ConsoleSink);

    let report = tokio::select! {
        received = receiver => received
            .map_err(|err| CliError::new(t!("validate.join_failed", error = err)))?
            .map_err(|err| CliError::new(t!("validate.client.init_failed", error = err)))?,
        _ = tokio::signal::ctrl_c() => {
            stdout_line("")?;
            stdout_line(&t!("validate.interrupted"))?;
            return Ok(ExitCode::from(EXIT_INTERRUPTED));
        }
    };

    render_summary(&report)?;

    report
        .write_to(&config.report_path)
        .map_err(|err| CliError::new(t!("report.write_failed", error = err)))?;
    stdout_line("")?;
    stdout_line(&t!("report.saved", path = config.report_path.display()))?;

    Ok(ExitCode::from(completion_code(report.overall_success)))
}

/// Spawns the validation sweep on a detached thread.
///
/// The thread reports back over a oneshot channel so the async side can race
/// the sweep against a signal. The thread is never joined: returning from
/// `main` while the sweep is still in flight terminates it with the process,
/// which is what makes an interrupt take effect immediately.
fn spawn_validation<S>(
    config: ValidatorConfig,
    sink: S,
) -> oneshot::Receiver<Result<ValidationReport, String>>
where
    S: TranscriptSink + Send + 'static,
{
    let (outcome_tx, outcome_rx) = oneshot::channel();
    let _detached = std::thread::spawn(move || {
        let outcome = UnlockValidator::new(&config)
            .map_err(|err| err.to_string())
            .map(|mut validator| validator.run_comprehensive_validation(&sink));
        let _ = outcome_tx.send(outcome);
    });
    outcome_rx
}

/// Applies validate-command flag overrides onto the loaded configuration.
fn apply_overrides(config: &mut ValidatorConfig, command: &ValidateCommand) {
    if let Some(base_url) = &command.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(report) = &command.report {
        config.report_path.clone_from(report);
    }
}

/// Maps the overall verdict onto the process completion code.
const fn completion_code(overall_success: bool) -> u8 {
    if overall_success { 0 } else { 1 }
}

/// Renders the final formatted summary block for a completed run.
fn render_summary(report: &ValidationReport) -> CliResult<()> {
    stdout_line("")?;
    stdout_line(SEPARATOR)?;
    stdout_line(&t!("report.header"))?;
    stdout_line(SEPARATOR)?;

    let rate = format!("{:.1}", report.success_rate);
    let seconds = format!("{:.2}", report.duration);
    stdout_line(&t!(
        "report.results",
        passed = report.passed_tests,
        total = report.total_tests,
        rate = rate,
    ))?;
    stdout_line(&t!("report.duration", seconds = seconds))?;
    stdout_line(&t!("report.fingerprint", fingerprint = report.fingerprint_validated))?;

    if report.overall_success {
        stdout_line(&t!("report.unlocked.headline"))?;
        stdout_line(&t!("report.unlocked.next"))?;
    } else {
        stdout_line(&t!("report.partial.headline"))?;
        stdout_line(&t!("report.partial.next"))?;
    }

    stdout_line("")?;
    stdout_line(&t!("report.module_status"))?;
    for (name, operational) in report.results.entries() {
        if operational {
            stdout_line(&t!("report.module.operational", name = name))?;
        } else {
            stdout_line(&t!("report.module.needs_attention", name = name))?;
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Console Sink
// ============================================================================

/// Transcript sink rendering live results to stdout.
struct ConsoleSink;

impl TranscriptSink for ConsoleSink {
    fn section(&self, title: &str) {
        let _ = write_stdout_line("");
        let _ = write_stdout_line(&t!("transcript.section", title = title));
    }

    fn result(&self, result: &TestResult) {
        let _ = write_stdout_line(&t!(
            "transcript.result",
            status = result.status_label,
            name = result.test_name,
        ));
        if !result.details.is_empty() {
            let _ = write_stdout_line(&t!("transcript.detail", details = result.details));
        }
    }
}

// ============================================================================
// SECTION: Locale Resolution
// ============================================================================

/// Resolves the CLI locale from the flag and environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes one line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes one line to stdout, converting failures into localized CLI errors.
fn stdout_line(message: &str) -> CliResult<()> {
    write_stdout_line(message).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes one line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits a failure message to stderr and returns the failure exit code.
fn emit_failure(message: &str) -> ExitCode {
    let _ = write_stderr_line(&t!("validate.failed", error = message));
    ExitCode::from(EXIT_FAILED)
}

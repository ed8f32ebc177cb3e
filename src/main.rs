//! portpick CLI - discover serial ports via an external helper and persist
//! a selection per workspace.
#![forbid(unsafe_code)]

use std::io;

use clap::Parser;
use console::style;
use serde::Serialize;

use portpick::cli::{self, Cli, Commands};
use portpick::error::{PortError, Result};
use portpick::logging;
use portpick::prompt::{TermChooser, TermNotifier};
use portpick::registry::PortRegistry;
use portpick::settings;
use portpick::workflow::{Notifier, SelectionOutcome, SettingsWriter};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.use_json(), cli.verbose, cli.quiet);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let result = run(&cli);

    if let Err(e) = result {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => print_quick_start(cli),
        Some(Commands::List(args)) => cmd_list(cli, args),
        Some(Commands::Select(args)) => cmd_select(cli, args),
        Some(Commands::Show(args)) => cmd_show(cli, args),
        Some(Commands::Version) => cmd_version(cli),
        Some(Commands::Completions(args)) => cmd_completions(cli, args),
    }
}

// === Quick Start ===

/// Prints quick-start help for both humans and agents.
#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn print_quick_start(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        output_json(
            cli,
            &RobotQuickStart {
                tool: "portpick",
                version: build_info::VERSION,
                description: "Serial port discovery and workspace-scoped selection",
                list_ports: "portpick list --robot",
                select_port: "portpick select",
                current_port: "portpick show --robot",
                workspace: "Use --workspace <DIR> (default: current directory)",
            },
        );
    } else {
        println!(
            "{} {} - serial port selection\n",
            style("portpick").bold().cyan(),
            build_info::VERSION
        );
        println!("  {}  List attached serial ports", style("portpick list").green());
        println!("  {}  Pick one and save it", style("portpick select").green());
        println!("  {}  Show the saved port", style("portpick show").green());
        println!();
        println!(
            "The selection is written to {} in the workspace (see --workspace).",
            settings::SETTINGS_FILE
        );
        println!("Run {} for full help", style("portpick --help").yellow());
    }
    Ok(())
}

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    list_ports: &'static str,
    select_port: &'static str,
    current_port: &'static str,
    workspace: &'static str,
}

// === Command Implementations ===

fn cmd_list(cli: &Cli, args: &cli::ListArgs) -> Result<()> {
    // Query path: errors propagate to the top-level printer untouched.
    let ports = PortRegistry::shared().ports(&cli.workspace)?;

    if cli.use_json() {
        output_json(cli, &ports);
    } else {
        for port in &ports {
            if args.long && !port.manufacturer.is_empty() {
                println!("{}  {}", style(&port.name).green(), port.manufacturer);
            } else {
                println!("{}", port.name);
            }
        }
    }
    Ok(())
}

/// Writer backing the workflow with the workspace settings store.
struct WorkspaceWriter;

impl SettingsWriter for WorkspaceWriter {
    fn write_port(&self, scope: &std::path::Path, value: &str) -> Result<std::path::PathBuf> {
        settings::write_port_setting(scope, value)
    }
}

/// Notifier for robot mode: errors become JSON lines on stderr, progress
/// text is dropped in favor of the structured result on stdout.
struct RobotNotifier;

impl Notifier for RobotNotifier {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str, err: &PortError) {
        eprintln!("{}", error_body(err));
    }
}

#[allow(clippy::unnecessary_wraps)] // Workflow failures are reported, not returned
fn cmd_select(cli: &Cli, _args: &cli::SelectArgs) -> Result<()> {
    let registry = PortRegistry::shared();
    let chooser = TermChooser::new();
    let outcome = if cli.use_json() {
        registry.prompt_and_persist(&cli.workspace, &chooser, &WorkspaceWriter, &RobotNotifier)
    } else {
        registry.prompt_and_persist(
            &cli.workspace,
            &chooser,
            &WorkspaceWriter,
            &TermNotifier::new(),
        )
    };

    match outcome {
        SelectionOutcome::Saved { port, location } => {
            if cli.use_json() {
                output_json(
                    cli,
                    &serde_json::json!({
                        "port": port,
                        "location": location.display().to_string(),
                        "ok": true
                    }),
                );
            }
            Ok(())
        }
        SelectionOutcome::Dismissed => {
            if cli.use_json() {
                output_json(cli, &serde_json::json!({ "dismissed": true, "ok": true }));
            } else if !cli.quiet {
                println!("No port selected");
            }
            Ok(())
        }
        // Already reported through the notifier; just set the exit code.
        SelectionOutcome::Failed => std::process::exit(1),
    }
}

fn cmd_show(cli: &Cli, args: &cli::ShowArgs) -> Result<()> {
    if args.path {
        let path = settings::WorkspaceSettings::file_path(&cli.workspace);
        println!("{}", path.display());
        return Ok(());
    }

    let port = settings::read_port_setting(&cli.workspace)?;

    if cli.use_json() {
        output_json(cli, &serde_json::json!({ "port": port }));
    } else {
        match port {
            Some(port) => println!("{port}"),
            None => println!("No port saved for this workspace"),
        }
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_version(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({
                "version": build_info::VERSION,
                "git_sha": build_info::git_sha(),
                "git_dirty": build_info::git_dirty() == "true",
                "build_timestamp": build_info::build_timestamp(),
                "rustc_version": build_info::rustc_semver(),
                "target": build_info::target(),
            }),
        );
    } else {
        println!("portpick {}", build_info::VERSION);
        println!(
            "git: {}{}",
            build_info::git_sha(),
            if build_info::git_dirty() == "true" {
                " (dirty)"
            } else {
                ""
            }
        );
        println!("built: {}", build_info::build_timestamp());
        println!("rustc: {}", build_info::rustc_semver());
        println!("target: {}", build_info::target());
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(_cli: &Cli, args: &cli::CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    clap_complete::generate(args.shell, &mut Cli::command(), "portpick", &mut io::stdout());
    Ok(())
}

// === Utility Functions ===

fn output_json<T: Serialize>(cli: &Cli, data: &T) {
    let json = if cli.use_compact_json() {
        serde_json::to_string(data).unwrap()
    } else {
        serde_json::to_string_pretty(data).unwrap()
    };
    println!("{json}");
}

/// Structured error record shared by `output_error` and `RobotNotifier`.
fn error_body(error: &PortError) -> serde_json::Value {
    serde_json::json!({
        "error": true,
        "message": error.to_string(),
        "suggestion": error.suggestion(),
        "recoverable": error.is_user_recoverable(),
    })
}

fn output_error(cli: &Cli, error: &PortError) {
    if cli.use_json() {
        eprintln!("{}", serde_json::to_string_pretty(&error_body(error)).unwrap());
    } else {
        eprintln!("{}: {}", style("Error").red().bold(), error);
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {}", style("Hint").yellow(), suggestion);
        }
    }
}

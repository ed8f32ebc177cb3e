//! Logging setup for the portpick CLI.
//!
//! All log output goes to stderr so stdout stays reserved for command
//! results (port lists, JSON payloads). Robot mode switches the
//! subscriber to JSON lines; human mode is pretty on a terminal and
//! plain compact when piped.

use std::io::{self, IsTerminal};

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

enum LogFormat {
    Json,
    Pretty,
    Compact,
}

/// Install the global subscriber for this process.
///
/// `verbose` raises the level (0 info, 1 debug, 2+ trace), `quiet` drops
/// it to errors only, and `RUST_LOG` overrides both when set.
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let format = if robot_mode {
        LogFormat::Json
    } else if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Compact
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose, quiet))
        .with(stderr_layer(format))
        .init();
}

fn env_filter(verbose: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)))
}

const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "portpick=error"
    } else {
        match verbose {
            0 => "portpick=info",
            1 => "portpick=debug",
            _ => "portpick=trace",
        }
    }
}

fn stderr_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => base.json().with_target(true).boxed(),
        LogFormat::Pretty => base.with_target(false).boxed(),
        LogFormat::Compact => base.with_target(false).with_ansi(false).compact().boxed(),
    }
}

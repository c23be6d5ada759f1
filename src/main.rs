// src/main.rs

use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info, warn};

use cross_correlation_render::config::Settings;
use cross_correlation_render::correlation_session::CorrelationSession;
use cross_correlation_render::crate_version;
use cross_correlation_render::data_input::signal_data::Signal;
use cross_correlation_render::data_input::signal_loader::load_signal_pair;
use cross_correlation_render::data_table::{lag_summary, write_data_table};
use cross_correlation_render::error::CorrelationResult;
use cross_correlation_render::logging::init_tracing;
use cross_correlation_render::plot_functions::plot_cross_correlation::plot_cross_correlation;

/// Shift one signal against another, cross-correlate them and render the
/// correlation charts plus a data table.
#[derive(Parser, Debug)]
#[command(name = "cross_correlation_render", version, about)]
struct Cli {
    /// Primary signal file (defaults to Data/Heel123.txt)
    #[arg(long)]
    primary: Option<PathBuf>,

    /// Secondary signal file, the one that gets shifted (defaults to Data/Toe123.txt)
    #[arg(long)]
    secondary: Option<PathBuf>,

    /// Initial time lag; clamped to the valid range
    #[arg(long, allow_negative_numbers = true)]
    lag: Option<i64>,

    /// Read further lags from stdin, one per line; `q` quits
    #[arg(long)]
    interactive: bool,

    /// Directory for the PNG output
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the table, skip chart rendering
    #[arg(long)]
    no_plot: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Folds command-line overrides into the file settings.
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(path) = &self.primary {
            settings.input.primary = path.clone();
        }
        if let Some(path) = &self.secondary {
            settings.input.secondary = path.clone();
        }
        if let Some(lag) = self.lag {
            settings.analysis.default_lag = lag;
        }
        if let Some(dir) = &self.output_dir {
            settings.plot.output_dir = dir.clone();
        }
        settings.logging.level = settings.logging.level.raised_by(self.verbose);
    }
}

const DEFAULT_ROOT_NAME: &str = "cross_correlation";

/// `'<path>' (<n> samples)`, or the signal name when it was not read from a file.
fn describe_signal(signal: &Signal) -> String {
    match signal.source() {
        Some(path) => format!("'{}' ({} samples)", path.display(), signal.len()),
        None => format!("{} ({} samples)", signal.name(), signal.len()),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LagCommand {
    Select(i64),
    Quit,
    Skip,
    Invalid(String),
}

fn parse_lag_command(line: &str) -> LagCommand {
    let trimmed = line.trim();
    match trimmed {
        "" => LagCommand::Skip,
        "q" | "quit" => LagCommand::Quit,
        _ => trimmed
            .parse::<i64>()
            .map(LagCommand::Select)
            .unwrap_or_else(|_| LagCommand::Invalid(trimmed.to_string())),
    }
}

/// Everything one interaction needs besides the session.
struct RenderTarget<'a> {
    output_dir: &'a Path,
    root_name: &'a str,
    plot_size: (u32, u32),
    plot: bool,
}

fn render_lag(
    session: &mut CorrelationSession,
    requested: i64,
    target: &RenderTarget,
) -> CorrelationResult<()> {
    let result = session.select_lag(requested).clone();

    println!("\n--- {} ---", lag_summary(session, &result));
    let stdout = io::stdout();
    write_data_table(stdout.lock(), session, &result)?;

    if target.plot {
        plot_cross_correlation(
            session,
            &result,
            target.output_dir,
            target.root_name,
            target.plot_size,
        )?;
    } else {
        debug!(lag = result.lag, "plotting disabled");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    cli.apply_to(&mut settings);
    init_tracing(settings.logging.level);
    info!(version = crate_version(), "starting");
    debug!(?settings, "effective settings");

    let (primary, secondary) =
        load_signal_pair(&settings.input.primary, &settings.input.secondary)?;
    let mut session = CorrelationSession::new(primary, secondary, settings.analysis.padding)?;
    let root_name = session
        .primary()
        .source()
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_ROOT_NAME.to_string());

    let bounds = session.lag_bounds();
    println!(
        "Loaded {} and {}; valid time lags {}..={}",
        describe_signal(session.primary()),
        describe_signal(session.secondary()),
        bounds.min(),
        bounds.max()
    );

    let plot = !cli.no_plot;
    if plot && !settings.plot.output_dir.as_os_str().is_empty() {
        fs::create_dir_all(&settings.plot.output_dir)?;
    }
    let target = RenderTarget {
        output_dir: &settings.plot.output_dir,
        root_name: &root_name,
        plot_size: settings.plot_size(),
        plot,
    };

    render_lag(&mut session, settings.analysis.default_lag, &target)?;
    if cli.interactive {
        run_interactive(&mut session, &target)?;
    }

    if let Some(last) = session.current() {
        info!(lag = last.lag, peak = ?last.peak, "finished");
    }
    Ok(())
}

/// Reads one lag per stdin line and re-renders until `q`, `quit` or EOF.
fn run_interactive(
    session: &mut CorrelationSession,
    target: &RenderTarget,
) -> Result<(), Box<dyn Error>> {
    let bounds = session.lag_bounds();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Time lag [{}..={}, q to quit]: ", bounds.min(), bounds.max());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        match parse_lag_command(&line?) {
            LagCommand::Select(lag) => render_lag(session, lag, target)?,
            LagCommand::Quit => break,
            LagCommand::Skip => continue,
            LagCommand::Invalid(input) => {
                warn!(input = %input, "ignoring input that is not an integer lag");
                println!("'{input}' is not an integer time lag.");
            }
        }
    }

    Ok(())
}

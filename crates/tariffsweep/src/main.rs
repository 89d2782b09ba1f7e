use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tariffsweep::{App, OutputFormat, init_logging, load_config, render_json, render_table};

#[derive(Parser, Debug)]
#[command(name = "tariffsweep")]
#[command(about = "Probability that firm M out-produces firm L across a tariff parameter sweep")]
struct Args {
    /// YAML file overriding any of the swept axes (default: published ranges)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How to present the results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Chart)]
    output: OutputFormat,

    /// Path to the data directory holding the log file (default: ~/.tariffsweep/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tariffsweep")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = load_config(args.config.as_deref())?;
    let report = tariffsweep_core::run(&config).wrap_err("parameter sweep failed")?;

    match args.output {
        OutputFormat::Chart => {
            let mut app = App::new(report);
            ratatui::run(|terminal| app.run(terminal))?;
            if let Err(err) = ratatui::try_restore() {
                tracing::error!("Failed to restore terminal: {err}");
            }
        }
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    tracing::info!("tariffsweep finished");
    Ok(())
}

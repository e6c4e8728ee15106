use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use nodegraph::config::{ConfigError, EngineConfig};
use nodegraph::engine::{Action, EngineCore};

mod script;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: std::io::Error },
    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("snapshot encode failed: {0}")]
    Encode(serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Parser, Debug)]
#[command(name = "nodegraph-cli", about = "Drive the node-graph scene engine from recorded input scripts")]
struct Cli {
    /// Engine options as a camelCase JSON file; `NODEGRAPH_*` variables apply otherwise.
    #[arg(long, env = "NODEGRAPH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON event script and print the resulting status messages.
    Replay {
        script: PathBuf,

        #[arg(long, help = "Write the final scene snapshot to this file")]
        snapshot_out: Option<PathBuf>,

        #[arg(long, default_value_t = false)]
        quiet: bool,
    },
    /// Print the effective engine options.
    Defaults,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Replay { script, snapshot_out, quiet } => {
            run_replay(config, &script, snapshot_out.as_deref(), quiet)
        }
        Command::Defaults => print_json(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, CliError> {
    let Some(path) = path else {
        return Ok(EngineConfig::from_env()?);
    };
    let text = read(path)?;
    let config = EngineConfig::from_json(&text)?;
    tracing::info!(path = %path.display(), "loaded engine config");
    Ok(config)
}

fn run_replay(config: EngineConfig, script: &Path, snapshot_out: Option<&Path>, quiet: bool) -> Result<(), CliError> {
    let events = script::parse_script(&read(script)?)?;
    let mut core = EngineCore::with_config(config);
    core.set_viewport(800.0, 600.0);

    tracing::info!(events = events.len(), script = %script.display(), "replaying");
    for (index, event) in events.into_iter().enumerate() {
        for action in event.apply(&mut core) {
            if quiet {
                continue;
            }
            if let Action::Status(status) = action {
                println!("{index:>4}  {status}");
            }
        }
    }

    let camera = core.camera();
    println!(
        "{} nodes, {} edges; {}; zoom {:.3} pan ({:.1}, {:.1})",
        core.nodes().len(),
        core.edges().len(),
        core.selection_summary(),
        camera.zoom,
        camera.pan_x,
        camera.pan_y,
    );

    if let Some(out) = snapshot_out {
        let json = serde_json::to_string_pretty(&core.export_snapshot()).map_err(CliError::Encode)?;
        fs::write(out, json).map_err(|source| CliError::Write { path: out.display().to_string(), source })?;
        tracing::info!(path = %out.display(), "snapshot written");
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.display().to_string(), source })
}

fn print_json(config: &EngineConfig) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(config).map_err(CliError::Encode)?);
    Ok(())
}

mod autopilot;
mod keyboard;
mod renderer;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use snake_engine::config::ConfigManager;
use snake_engine::{log, logger, GameSettings, InputSource, Renderer, SnakeEngine};
use tokio::sync::{mpsc, watch};

use autopilot::Autopilot;
use keyboard::KeyboardInput;
use renderer::{StatusRenderer, TextRenderer};
use session::{run_session, SessionOptions};

#[derive(Parser)]
#[command(name = "snake_runner", about = "Runs the snake simulation on a timer")]
struct Args {
    /// YAML file with game settings; defaults are used when it does not exist
    #[arg(long, default_value = "snake.yaml")]
    config: PathBuf,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    /// Seed for food placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Let the built-in pilot steer instead of reading the keyboard
    #[arg(long)]
    autopilot: bool,

    /// Draw every frame to stdout
    #[arg(long)]
    render: bool,

    #[arg(long)]
    max_ticks: Option<u64>,

    #[arg(long)]
    exit_on_game_over: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager: ConfigManager<_, GameSettings> =
        ConfigManager::from_yaml_file(&args.config);
    let settings = config_manager.get_config()?;
    if args.save_config {
        config_manager.set_config(&settings)?;
        log!("Settings saved to {}", args.config.display());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut engine = SnakeEngine::new(settings, seed)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let shutdown_tx = Arc::new(shutdown_tx);

    let mut inputs: Vec<Box<dyn InputSource + Send>> = Vec::new();
    if args.autopilot {
        inputs.push(Box::new(Autopilot::new(!args.exit_on_game_over)));
        log!("Autopilot engaged");
    } else {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        keyboard::spawn_stdin_reader(command_tx, shutdown_tx.clone());
        inputs.push(Box::new(KeyboardInput::new(command_rx)));
        log!("{}", keyboard::CONTROLS_HELP);
    }

    let ctrl_c_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log!("Shutdown signal received");
            let _ = ctrl_c_tx.send(true);
        }
    });

    let mut renderer: Box<dyn Renderer + Send> = if args.render {
        Box::new(TextRenderer::stdout())
    } else {
        Box::new(StatusRenderer::new())
    };

    let options = SessionOptions {
        max_ticks: args.max_ticks,
        exit_on_game_over: args.exit_on_game_over,
    };

    let summary = run_session(
        &mut engine,
        &mut inputs,
        renderer.as_mut(),
        &options,
        shutdown_rx,
    )
    .await;

    log!(
        "Session finished: {} ticks, {} games ({} ended), best score {}, seed {}",
        summary.ticks,
        summary.games_played,
        summary.games_finished,
        summary.best_score,
        engine.seed()
    );

    Ok(())
}

use snake_engine::{debug_log, log, InputSource, Renderer, SnakeEngine, TickOutcome};
use tokio::sync::watch;

#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    /// Stop after this many scheduler ticks, paused ones included.
    pub max_ticks: Option<u64>,
    pub exit_on_game_over: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub games_played: u32,
    pub games_finished: u32,
    pub best_score: u32,
}

/// Drives the engine on a timer whose period is re-read after every tick.
///
/// Input is collected between ticks and applied right before the next one,
/// so the engine only ever sees one timeline of commands.
pub async fn run_session(
    engine: &mut SnakeEngine,
    inputs: &mut [Box<dyn InputSource + Send>],
    renderer: &mut dyn Renderer,
    options: &SessionOptions,
    mut shutdown: watch::Receiver<bool>,
) -> SessionSummary {
    let mut summary = SessionSummary::default();
    renderer.render(engine.state());

    loop {
        if *shutdown.borrow() {
            log!("Stopping session on request");
            break;
        }
        if let Some(max_ticks) = options.max_ticks
            && summary.ticks >= max_ticks
        {
            log!("Reached the tick limit of {}", max_ticks);
            break;
        }

        let delay = engine.current_tick_interval();
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            changed = shutdown.changed() => {
                if changed.is_err() {
                    debug_log!("Shutdown channel closed");
                    break;
                }
                continue;
            }
        }

        for input in inputs.iter_mut() {
            for command in input.poll(engine.state()) {
                if !engine.apply(command) {
                    debug_log!("Ignored {:?}", command);
                }
            }
        }

        let outcome = engine.tick();
        summary.ticks += 1;
        summary.best_score = summary.best_score.max(engine.state().score());
        renderer.render(engine.state());

        if let TickOutcome::GameOver(_) = outcome {
            summary.games_finished += 1;
            if options.exit_on_game_over {
                break;
            }
        }
    }

    summary.games_played = engine.games_played();
    summary
}

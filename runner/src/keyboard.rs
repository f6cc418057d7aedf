use std::io::BufRead;
use std::sync::Arc;
use std::thread::JoinHandle;

use snake_engine::{debug_log, warn_log, Direction, EngineCommand, GameState, InputSource};
use tokio::sync::{mpsc, watch};

pub const CONTROLS_HELP: &str = "Controls: w/a/s/d or up/left/down/right to turn, \
     p to pause, r or space to restart, q to quit (press Enter after each)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardCommand {
    Engine(EngineCommand),
    Quit,
}

fn parse_word(word: &str) -> Option<KeyboardCommand> {
    let command = match word {
        "up" | "w" | "k" => EngineCommand::Turn(Direction::Up),
        "down" | "s" | "j" => EngineCommand::Turn(Direction::Down),
        "left" | "a" | "h" => EngineCommand::Turn(Direction::Left),
        "right" | "d" | "l" => EngineCommand::Turn(Direction::Right),
        "pause" | "p" => EngineCommand::TogglePause,
        "restart" | "r" | "space" => EngineCommand::Restart,
        "quit" | "q" | "exit" => return Some(KeyboardCommand::Quit),
        _ => return None,
    };
    Some(KeyboardCommand::Engine(command))
}

/// One line of input may carry several gestures: whole words are tried
/// first, otherwise every character counts as a key press.
pub fn parse_line(line: &str) -> Vec<KeyboardCommand> {
    let mut commands = Vec::new();
    for word in line.split_whitespace() {
        let word = word.to_ascii_lowercase();
        if let Some(command) = parse_word(&word) {
            commands.push(command);
            continue;
        }
        let keys: Vec<KeyboardCommand> = word
            .chars()
            .filter_map(|key| parse_word(key.encode_utf8(&mut [0; 4])))
            .collect();
        if keys.is_empty() {
            debug_log!("Ignoring unknown input {:?}", word);
        }
        commands.extend(keys);
    }
    commands
}

/// Reads stdin on a plain thread so a pending read never keeps the runtime
/// alive at shutdown.
pub fn spawn_stdin_reader(
    command_tx: mpsc::UnboundedSender<EngineCommand>,
    shutdown_tx: Arc<watch::Sender<bool>>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn_log!("Failed to read from stdin: {}", e);
                    return;
                }
            };
            for command in parse_line(&line) {
                match command {
                    KeyboardCommand::Quit => {
                        let _ = shutdown_tx.send(true);
                        return;
                    }
                    KeyboardCommand::Engine(command) => {
                        if command_tx.send(command).is_err() {
                            return;
                        }
                    }
                }
            }
        }
        debug_log!("stdin closed, keyboard input finished");
    })
}

pub struct KeyboardInput {
    command_rx: mpsc::UnboundedReceiver<EngineCommand>,
}

impl KeyboardInput {
    pub fn new(command_rx: mpsc::UnboundedReceiver<EngineCommand>) -> Self {
        Self { command_rx }
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self, _state: &GameState) -> Vec<EngineCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = self.command_rx.try_recv() {
            commands.push(command);
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::{GameSettings, SnakeEngine};

    #[test]
    fn test_parse_words() {
        assert_eq!(
            parse_line("up Left quit"),
            vec![
                KeyboardCommand::Engine(EngineCommand::Turn(Direction::Up)),
                KeyboardCommand::Engine(EngineCommand::Turn(Direction::Left)),
                KeyboardCommand::Quit,
            ]
        );
    }

    #[test]
    fn test_parse_key_sequence() {
        assert_eq!(
            parse_line("wd p"),
            vec![
                KeyboardCommand::Engine(EngineCommand::Turn(Direction::Up)),
                KeyboardCommand::Engine(EngineCommand::Turn(Direction::Right)),
                KeyboardCommand::Engine(EngineCommand::TogglePause),
            ]
        );
    }

    #[test]
    fn test_space_restarts_and_p_pauses() {
        assert_eq!(
            parse_line("space"),
            vec![KeyboardCommand::Engine(EngineCommand::Restart)]
        );
        assert_eq!(
            parse_line("pause"),
            vec![KeyboardCommand::Engine(EngineCommand::TogglePause)]
        );
    }

    #[test]
    fn test_unknown_input_ignored() {
        assert!(parse_line("xyz 123").is_empty());
        assert!(parse_line("").is_empty());
    }

    #[test]
    fn test_keyboard_input_drains_queue_in_order() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut input = KeyboardInput::new(rx);
        let engine = SnakeEngine::new(GameSettings::default(), 1).unwrap();

        tx.send(EngineCommand::Turn(Direction::Up)).unwrap();
        tx.send(EngineCommand::TogglePause).unwrap();

        assert_eq!(
            input.poll(engine.state()),
            vec![EngineCommand::Turn(Direction::Up), EngineCommand::TogglePause]
        );
        assert!(input.poll(engine.state()).is_empty());
    }
}

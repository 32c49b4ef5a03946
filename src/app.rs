use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;

use crate::audio::AudioManager;
use crate::input::{InputManager, fold_actions};
use crate::renderer::GameRenderer;
use crate::score::HighScoreFile;
use crate::world::{GameEvent, World};

/// The frame driver: owns the world and its collaborators and runs one
/// update-and-render step per frame.
pub struct App {
    running: bool,
    world: World,
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
    high_score_file: HighScoreFile,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let high_score_file = HighScoreFile::at_default_location();
        let high_score = high_score_file.load();

        // Reasonable defaults, corrected from the real terminal size before
        // the first frame
        let world = World::new(120.0, 30.0, high_score);

        Self {
            running: true,
            world,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager: AudioManager::default(),
            high_score_file,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            // Playfield bounds follow the terminal
            let size = terminal.size()?;
            self.world.resize(size.width as f32, size.height as f32);

            terminal.draw(|frame| self.renderer.render(frame, &self.world))?;

            self.input_manager.poll_events(self.world.state)?;
            let actions = self.input_manager.get_actions(self.world.state);
            let Some(tick_input) = fold_actions(&actions) else {
                self.running = false;
                continue;
            };

            for event in self.world.tick(tick_input) {
                match event {
                    GameEvent::Sound(effect) => self.audio_manager.play(effect),
                    GameEvent::RunEnded {
                        score,
                        new_high_score,
                    } => {
                        if new_high_score {
                            self.high_score_file.record(score);
                        }
                    }
                }
            }

            // Small sleep to maintain ~60 FPS and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }
}

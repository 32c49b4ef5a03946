use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::world::SoundEffect;

type BufferedSound = Buffered<Decoder<BufReader<File>>>;

/// Plays fire-and-forget sound effects. Initialization failure or a missing
/// sound file never stops the game, it just goes quiet.
pub struct AudioManager {
    output: Option<AudioOutput>,
}

struct AudioOutput {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    shoot: Option<BufferedSound>,
    explosion: Option<BufferedSound>,
    powerup: Option<BufferedSound>,
    boss_entry: Option<BufferedSound>,
}

impl AudioManager {
    /// Create an audio manager and pre-buffer the effect files.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let (stream, stream_handle) = OutputStream::try_default()?;

        Ok(Self {
            output: Some(AudioOutput {
                _stream: stream,
                stream_handle,
                shoot: load_sound("assets/sounds/shoot.wav"),
                explosion: load_sound("assets/sounds/explosion.wav"),
                powerup: load_sound("assets/sounds/powerup.wav"),
                boss_entry: load_sound("assets/sounds/boss.wav"),
            }),
        })
    }

    /// A manager that plays nothing.
    pub fn silent() -> Self {
        Self { output: None }
    }

    pub fn play(&self, effect: SoundEffect) {
        let Some(output) = &self.output else {
            return;
        };
        let source = match effect {
            SoundEffect::Shoot => &output.shoot,
            SoundEffect::Explosion => &output.explosion,
            SoundEffect::PowerUp => &output.powerup,
            SoundEffect::BossEntry => &output.boss_entry,
        };
        let Some(source) = source else {
            return;
        };
        // Playback errors are ignored, a dropped effect must not crash a frame
        if let Ok(sink) = Sink::try_new(&output.stream_handle) {
            sink.set_volume(0.2);
            // Cloning a buffered source only clones references
            sink.append(source.clone());
            sink.detach();
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new().unwrap_or_else(|err| {
            eprintln!("Warning: failed to initialize audio: {err}");
            eprintln!("Continuing without audio...");
            Self::silent()
        })
    }
}

fn load_sound(path: impl AsRef<Path>) -> Option<BufferedSound> {
    let file = File::open(path).ok()?;
    let source = Decoder::new(BufReader::new(file)).ok()?;
    Some(source.buffered())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_manager_swallows_triggers() {
        let audio = AudioManager::silent();
        audio.play(SoundEffect::Shoot);
        audio.play(SoundEffect::Explosion);
        audio.play(SoundEffect::PowerUp);
        audio.play(SoundEffect::BossEntry);
    }

    #[test]
    fn test_missing_sound_file_is_none() {
        assert!(load_sound("assets/sounds/does-not-exist.wav").is_none());
    }
}

//! Sound cues
//!
//! Thin wrappers over macroquad's audio: each cue is one loaded sound with
//! its loop/volume configuration baked in. `play` always restarts the cue
//! from the beginning.

use macroquad::audio::{load_sound, play_sound, set_sound_volume, stop_sound, PlaySoundParams, Sound};

use crate::assets::CatalogError;

/// One playable sound resource.
pub struct AudioCue {
    sound: Sound,
    looped: bool,
    volume: f32,
}

impl AudioCue {
    /// Load a cue from disk. A missing or undecodable file is a hard error;
    /// the caller aborts the whole sound-bank load.
    pub async fn load(path: &str, looped: bool, volume: f32) -> Result<Self, CatalogError> {
        let sound = load_sound(path)
            .await
            .map_err(|e| CatalogError::Sound { path: path.to_string(), message: e.to_string() })?;
        Ok(Self { sound, looped, volume })
    }

    /// Play from the beginning.
    pub fn play(&self) {
        play_sound(
            &self.sound,
            PlaySoundParams { looped: self.looped, volume: self.volume },
        );
    }

    pub fn pause(&self) {
        stop_sound(&self.sound);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        set_sound_volume(&self.sound, volume);
    }
}

/// The game's fixed set of cues.
pub struct SoundBank {
    pub music: AudioCue,
    pub collision: AudioCue,
    pub horn: AudioCue,
    pub starting: AudioCue,
    pub idle: AudioCue,
}

impl SoundBank {
    /// Load every cue; the first failure aborts the whole bank.
    pub async fn load(volume: f32) -> Result<Self, CatalogError> {
        Ok(Self {
            music: AudioCue::load("assets/sounds/pioneers.ogg", true, volume).await?,
            collision: AudioCue::load("assets/sounds/car-explosion.ogg", false, volume).await?,
            horn: AudioCue::load("assets/sounds/car-horn.ogg", false, volume).await?,
            starting: AudioCue::load("assets/sounds/car-starting.ogg", false, volume).await?,
            idle: AudioCue::load("assets/sounds/car-idle.ogg", true, volume).await?,
        })
    }

    /// Master volume over every cue.
    pub fn set_volume(&mut self, volume: f32) {
        self.music.set_volume(volume);
        self.collision.set_volume(volume);
        self.horn.set_volume(volume);
        self.starting.set_volume(volume);
        self.idle.set_volume(volume);
    }

    /// Silence the looped/engine cues when a session ends. The collision cue
    /// is left alone so the crash can ring out over the game-over screen.
    pub fn pause_all_but_collision(&self) {
        self.music.pause();
        self.horn.pause();
        self.starting.pause();
        self.idle.pause();
    }
}

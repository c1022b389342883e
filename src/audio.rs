//! Sound effect triggers
//!
//! The simulation only fires triggers. Mixing belongs to whatever backend the
//! host wires up; [`AudioQueue`] buffers triggers for it to pick up.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bird flapped
    Flap,
    /// Passed an obstacle pair
    Score,
    /// Bird hit an obstacle or the floor
    Hit,
}

/// Fire-and-forget sound sink
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    fn flap(&mut self) {
        self.play(SoundEffect::Flap);
    }

    fn score(&mut self) {
        self.play(SoundEffect::Score);
    }

    fn hit(&mut self) {
        self.play(SoundEffect::Hit);
    }
}

/// Drops every trigger
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Buffers triggers for a mixer to drain once per frame
#[derive(Debug, Clone)]
pub struct AudioQueue {
    pending: Vec<(SoundEffect, f32)>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Take everything queued since the last drain, with its volume
    pub fn drain(&mut self) -> Vec<(SoundEffect, f32)> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl AudioSink for AudioQueue {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("sound: {:?} at {:.2}", effect, vol);
        self.pending.push((effect, vol));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drains_in_order() {
        let mut audio = AudioQueue::new();
        audio.flap();
        audio.score();
        audio.hit();

        let effects: Vec<_> = audio.drain().into_iter().map(|(e, _)| e).collect();
        assert_eq!(effects, vec![SoundEffect::Flap, SoundEffect::Score, SoundEffect::Hit]);
        assert!(audio.is_empty());
    }

    #[test]
    fn test_muted_queue_drops() {
        let mut audio = AudioQueue::new();
        audio.set_muted(true);
        audio.hit();
        assert!(audio.is_empty());

        audio.set_muted(false);
        audio.set_sfx_volume(0.5);
        audio.hit();
        let drained = audio.drain();
        assert_eq!(drained.len(), 1);
        assert!((drained[0].1 - 0.4).abs() < 1e-6);
    }
}

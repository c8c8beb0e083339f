//! Generated tones for the eat and bonus cues.

use anyhow::{Result, anyhow};
use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};
use tracing::debug;

use crate::game::AudioCue;

const SAMPLE_RATE: u32 = 44_100;

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BLOCK_ALIGN: u16 = CHANNELS * BITS_PER_SAMPLE / 8;

/// Synthesises `(frequency, seconds)` sine tones back to back.
fn synth(tones: &[(f32, f32)], volume: f32) -> Vec<i16> {
    let amplitude = volume.clamp(0.0, 1.0) * 0.7 * i16::MAX as f32;
    tones
        .iter()
        .flat_map(|&(frequency, seconds)| {
            let count = (seconds * SAMPLE_RATE as f32) as u32;
            (0..count).map(move |n| {
                let t = n as f32 / SAMPLE_RATE as f32;
                (amplitude * (std::f32::consts::TAU * frequency * t).sin()) as i16
            })
        })
        .collect()
}

/// Wraps samples in a canonical 44-byte RIFF/WAVE header.
fn pcm16_wav(samples: &[i16]) -> Vec<u8> {
    let data_size = (samples.len() * BLOCK_ALIGN as usize) as u32;
    let header: [&[u8]; 13] = [
        b"RIFF",
        &(36 + data_size).to_le_bytes(),
        b"WAVE",
        b"fmt ",
        &16u32.to_le_bytes(),
        &1u16.to_le_bytes(), // PCM
        &CHANNELS.to_le_bytes(),
        &SAMPLE_RATE.to_le_bytes(),
        &(SAMPLE_RATE * BLOCK_ALIGN as u32).to_le_bytes(),
        &BLOCK_ALIGN.to_le_bytes(),
        &BITS_PER_SAMPLE.to_le_bytes(),
        b"data",
        &data_size.to_le_bytes(),
    ];

    let mut wav = header.concat();
    wav.reserve(data_size as usize);
    wav.extend(samples.iter().flat_map(|sample| sample.to_le_bytes()));
    wav
}

fn tone_wav(tones: &[(f32, f32)], volume: f32) -> Vec<u8> {
    pcm16_wav(&synth(tones, volume))
}

async fn load(name: &str, wav: &[u8]) -> Result<Sound> {
    load_sound_from_bytes(wav)
        .await
        .map_err(|err| anyhow!("failed to decode {name} sound: {err:?}"))
}

pub struct Sounds {
    eat: Sound,
    bonus: Sound,
}

impl Sounds {
    pub async fn load() -> Result<Self> {
        let eat = load("eat", &tone_wav(&[(880.0, 0.08)], 0.6)).await?;
        // rising arpeggio
        let bonus_tones = [(660.0, 0.08), (990.0, 0.08), (1320.0, 0.12)];
        let bonus = load("bonus", &tone_wav(&bonus_tones, 0.6)).await?;
        Ok(Self { eat, bonus })
    }

    pub fn play(&self, cue: AudioCue, volume: f32) {
        let sound = match cue {
            AudioCue::Eat => &self.eat,
            AudioCue::Bonus => &self.bonus,
        };
        debug!(?cue, volume, "play cue");
        play_sound(sound, PlaySoundParams { looped: false, volume });
    }
}

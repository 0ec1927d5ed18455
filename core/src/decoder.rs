//! Stateful multi-frame decoder: collects frames for one packet, keyed by
//! sequence id, and invokes Reed-Solomon once enough have arrived.

use std::collections::HashMap;

use crate::error::{CoreError, Result};
use crate::frame::Frame;
use crate::packet::CHUNK_SIZE;
use aurora_fec::decode as rs_decode;

#[derive(Debug, Default)]
pub struct MultiFrameDecoder {
    state: DecoderState,
}

#[derive(Debug)]
enum DecoderState {
    Uninitialized,
    Active(ActiveState),
}

impl Default for DecoderState {
    fn default() -> Self {
        DecoderState::Uninitialized
    }
}

#[derive(Debug)]
struct ActiveState {
    sequence_id: u16,
    total_frames: u8,
    data_frames: usize,
    parity_frames: usize,
    frames: HashMap<u8, Frame>,
}

impl MultiFrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.state = DecoderState::Uninitialized;
    }

    /// Adds a frame to the in-progress packet. Returns `false` if the
    /// frame's `frame_index` is out of range for its declared
    /// `total_frames` — rejected before any adoption or insertion happens,
    /// whether this is the first frame, a frame starting a new sequence, or
    /// a frame for the already-active sequence.
    pub fn add_frame(&mut self, frame: Frame) -> bool {
        if frame.frame_index >= frame.total_frames {
            return false;
        }
        match &mut self.state {
            DecoderState::Uninitialized => {
                self.adopt(frame);
                true
            }
            DecoderState::Active(active) if frame.sequence_id != active.sequence_id => {
                log::info!(
                    "sequence id changed ({:#06x} -> {:#06x}); resetting decoder",
                    active.sequence_id,
                    frame.sequence_id
                );
                self.adopt(frame);
                true
            }
            DecoderState::Active(active) => {
                log::debug!("accepted frame {} for sequence {:#06x}", frame.frame_index, active.sequence_id);
                active.frames.insert(frame.frame_index, frame);
                true
            }
        }
    }

    /// `frame.frame_index < frame.total_frames` is already guaranteed by the caller.
    fn adopt(&mut self, frame: Frame) {
        let data_frames = frame.total_frames as usize - frame.parity_count as usize;
        let mut active = ActiveState {
            sequence_id: frame.sequence_id,
            total_frames: frame.total_frames,
            data_frames,
            parity_frames: frame.parity_count as usize,
            frames: HashMap::new(),
        };
        let index = frame.frame_index;
        active.frames.insert(index, frame);
        self.state = DecoderState::Active(active);
    }

    pub fn collected(&self) -> usize {
        match &self.state {
            DecoderState::Uninitialized => 0,
            DecoderState::Active(a) => a.frames.len(),
        }
    }

    pub fn required(&self) -> Option<usize> {
        match &self.state {
            DecoderState::Uninitialized => None,
            DecoderState::Active(a) => Some(a.data_frames),
        }
    }

    pub fn can_decode(&self) -> bool {
        matches!(self.required(), Some(required) if self.collected() >= required)
    }

    /// Reed-Solomon recovers the packet and returns the UTF-8 text, trimmed
    /// at the first NUL padding byte.
    pub fn decode(&self) -> Result<String> {
        let active = match &self.state {
            DecoderState::Uninitialized => return Err(CoreError::NotInitialized),
            DecoderState::Active(a) => a,
        };

        if !self.can_decode() {
            let missing: Vec<u8> = (0..active.total_frames)
                .filter(|i| !active.frames.contains_key(i))
                .collect();
            return Err(CoreError::InsufficientFrames {
                collected: active.frames.len(),
                required: active.data_frames,
                missing,
            });
        }

        let mut matrix = vec![0u8; active.data_frames * CHUNK_SIZE];
        for col in 0..CHUNK_SIZE {
            let column: Vec<Option<u8>> = (0..active.total_frames as usize)
                .map(|row| active.frames.get(&(row as u8)).map(|f| f.data_chunk[col]))
                .collect();
            let decoded = rs_decode(&column, active.data_frames, active.parity_frames)?;
            for (row, &byte) in decoded.iter().enumerate() {
                matrix[row * CHUNK_SIZE + col] = byte;
            }
        }

        let text = std::str::from_utf8(&matrix)?;
        let trimmed = text.split('\0').next().unwrap_or("");
        Ok(trimmed.to_string())
    }
}

//! Packet encoding: UTF-8 text -> padded byte matrix -> column-wise RS -> frames.

use crate::error::{CoreError, Result};
use crate::frame::Frame;
use aurora_fec::encode as rs_encode;
use rand::Rng;

/// Bytes of payload carried per frame's `data_chunk`.
pub const CHUNK_SIZE: usize = 10;
/// Minimum parity frames, regardless of how small `data_frames` is.
const MIN_PARITY: usize = 4;
/// `redundancy_ratio` of 0.8 implies `parity = ceil(data_frames * (1 - r) / r)`.
const PARITY_NUMERATOR: usize = 1;
const PARITY_DENOMINATOR: usize = 4;

fn div_ceil(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

/// Encodes `text` into the ordered sequence of frames that make up one packet.
///
/// Returns an error if `text` is empty or the message would need more than
/// 255 frames total.
pub fn encode_packet(text: &str) -> Result<Vec<Frame>> {
    let raw = text.as_bytes();
    if raw.is_empty() {
        return Err(CoreError::EmptyInput);
    }

    let data_frames = div_ceil(raw.len(), CHUNK_SIZE);
    let parity_frames = (MIN_PARITY).max(div_ceil(data_frames * PARITY_NUMERATOR, PARITY_DENOMINATOR));
    let total_frames = data_frames + parity_frames;
    if total_frames > 255 {
        return Err(CoreError::MessageTooLong { data_frames });
    }

    let mut padded = raw.to_vec();
    padded.resize(data_frames * CHUNK_SIZE, 0);

    // matrix[row][col], row-major, row = data frame index.
    let mut columns: Vec<Vec<u8>> = vec![Vec::with_capacity(data_frames); CHUNK_SIZE];
    for row in 0..data_frames {
        for col in 0..CHUNK_SIZE {
            columns[col].push(padded[row * CHUNK_SIZE + col]);
        }
    }

    let mut encoded_columns: Vec<Vec<u8>> = Vec::with_capacity(CHUNK_SIZE);
    for col in &columns {
        encoded_columns.push(rs_encode(col, parity_frames));
    }

    let sequence_id: u16 = rand::thread_rng().gen();
    log::info!(
        "encoding packet: sequence_id={sequence_id:#06x} data_frames={data_frames} parity_frames={parity_frames}"
    );

    let mut frames = Vec::with_capacity(total_frames);
    for row in 0..total_frames {
        let mut chunk = [0u8; CHUNK_SIZE];
        for (col, chunk_byte) in chunk.iter_mut().enumerate() {
            *chunk_byte = encoded_columns[col][row];
        }
        frames.push(Frame::new(
            row as u8,
            total_frames as u8,
            sequence_id,
            chunk,
            parity_frames as u8,
        ));
    }
    Ok(frames)
}

use aurora_core::Frame;
use serde::{Deserialize, Serialize};

/// JSON-friendly mirror of [`aurora_core::Frame`]; the library type itself
/// stays free of a `serde` dependency since the wire protocol is binary.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FrameJson {
    pub frame_index: u8,
    pub total_frames: u8,
    pub sequence_id: u16,
    pub data_chunk: [u8; 10],
    pub checksum: u8,
    pub parity_count: u8,
}

impl From<&Frame> for FrameJson {
    fn from(f: &Frame) -> Self {
        Self {
            frame_index: f.frame_index,
            total_frames: f.total_frames,
            sequence_id: f.sequence_id,
            data_chunk: f.data_chunk,
            checksum: f.checksum,
            parity_count: f.parity_count,
        }
    }
}

impl From<FrameJson> for Frame {
    fn from(j: FrameJson) -> Self {
        Frame {
            frame_index: j.frame_index,
            total_frames: j.total_frames,
            sequence_id: j.sequence_id,
            data_chunk: j.data_chunk,
            checksum: j.checksum,
            parity_count: j.parity_count,
        }
    }
}

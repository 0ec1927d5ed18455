use crate::crc::crc8;

/// A single 16-byte wire frame.
///
/// Byte 15 carries `parity_count`, the packet's `P`, rather than the
/// zero-filled reserved byte an earlier revision of this format used — see
/// [`crate::decoder`] for why the receiver needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub frame_index: u8,
    pub total_frames: u8,
    pub sequence_id: u16,
    pub data_chunk: [u8; 10],
    pub checksum: u8,
    pub parity_count: u8,
}

pub const FRAME_LEN: usize = 16;

impl Frame {
    /// Builds a frame, computing `checksum` from `data_chunk`.
    pub fn new(frame_index: u8, total_frames: u8, sequence_id: u16, data_chunk: [u8; 10], parity_count: u8) -> Self {
        let checksum = crc8(&data_chunk);
        Self {
            frame_index,
            total_frames,
            sequence_id,
            data_chunk,
            checksum,
            parity_count,
        }
    }

    pub fn verify_checksum(&self) -> bool {
        crc8(&self.data_chunk) == self.checksum
    }

    pub fn is_sync_frame(&self) -> bool {
        self.frame_index == 0
    }

    pub fn serialize(&self) -> [u8; FRAME_LEN] {
        let mut out = [0u8; FRAME_LEN];
        out[0] = self.frame_index;
        out[1] = self.total_frames;
        out[2..4].copy_from_slice(&self.sequence_id.to_be_bytes());
        out[4..14].copy_from_slice(&self.data_chunk);
        out[14] = self.checksum;
        out[15] = self.parity_count;
        out
    }

    /// Total, non-validating: the caller checks `verify_checksum` separately.
    pub fn deserialize(data: &[u8; FRAME_LEN]) -> Self {
        let mut data_chunk = [0u8; 10];
        data_chunk.copy_from_slice(&data[4..14]);
        Self {
            frame_index: data[0],
            total_frames: data[1],
            sequence_id: u16::from_be_bytes([data[2], data[3]]),
            data_chunk,
            checksum: data[14],
            parity_count: data[15],
        }
    }
}

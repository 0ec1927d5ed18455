//! The aurora wire protocol: frame layout, CRC-8 integrity, the palette and
//! band codec, the packet encoder, and the multi-frame decoder.
//!
//! This crate is pure computation — no I/O, no rendering, no camera
//! access. [`crate::decoder::MultiFrameDecoder`] is not thread-safe; a host
//! driving it from multiple threads must serialize access itself.

pub mod band;
pub mod crc;
pub mod decoder;
pub mod error;
pub mod frame;
pub mod packet;
pub mod palette;

pub use decoder::MultiFrameDecoder;
pub use error::{CoreError, Result};
pub use frame::{Frame, FRAME_LEN};
pub use packet::encode_packet;

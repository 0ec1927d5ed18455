//! GF(2^8) arithmetic and systematic Reed–Solomon erasure coding.
//!
//! `gf` holds the field primitives; `rs` builds the codec on top of them.
//! Everything above this crate works with plain byte buffers, not frames
//! or symbols — those concerns live in `aurora-core`.

pub mod gf;
pub mod rs;

pub use gf::{FecError, Result};
pub use rs::{decode, encode};

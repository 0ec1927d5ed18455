use aurora_error::AuroraError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("input is empty; there is nothing to encode")]
    EmptyInput,

    #[error("message too long: {data_frames} data frames would exceed the 255-frame header limit")]
    MessageTooLong { data_frames: usize },

    #[error("reed-solomon encode/decode error: {0}")]
    Fec(#[from] aurora_fec::FecError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("not enough frames to decode: have {collected}, need {required}; missing {missing:?}")]
    InsufficientFrames {
        collected: usize,
        required: usize,
        missing: Vec<u8>,
    },

    #[error("decoder has not received any frame yet")]
    NotInitialized,
}

impl AuroraError for CoreError {
    fn kind(&self) -> &'static str {
        "core"
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

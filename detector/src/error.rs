use aurora_error::AuroraError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectorError {
    #[error("raster pixel buffer length {got} does not match width*height*4 ({expected})")]
    MalformedRaster { got: usize, expected: usize },
}

impl AuroraError for DetectorError {
    fn kind(&self) -> &'static str {
        "detector"
    }
}

pub type Result<T> = std::result::Result<T, DetectorError>;

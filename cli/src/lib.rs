pub mod error;
pub mod json;
pub mod options;

use aurora_core::{encode_packet, Frame, MultiFrameDecoder};
use error::{CliError, Result};
use json::FrameJson;
use options::Command;

pub fn run(command: Command) -> Result<String> {
    match command {
        Command::Encode { text } => run_encode(&text),
        Command::Decode { file } => run_decode(&file),
        Command::Simulate { text, drop } => run_simulate(&text, drop),
    }
}

fn run_encode(text: &str) -> Result<String> {
    let frames = encode_packet(text)?;
    let json_frames: Vec<FrameJson> = frames.iter().map(FrameJson::from).collect();
    Ok(serde_json::to_string_pretty(&json_frames)?)
}

fn read_frames(file: &str) -> Result<Vec<Frame>> {
    let contents = if file == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Io { path: file.to_string(), source })?;
        buf
    } else {
        std::fs::read_to_string(file).map_err(|source| CliError::Io { path: file.to_string(), source })?
    };
    let json_frames: Vec<FrameJson> = serde_json::from_str(&contents)?;
    Ok(json_frames.into_iter().map(Frame::from).collect())
}

fn run_decode(file: &str) -> Result<String> {
    let frames = read_frames(file)?;
    let mut decoder = MultiFrameDecoder::new();
    for f in frames {
        decoder.add_frame(f);
    }
    Ok(decoder.decode()?)
}

fn run_simulate(text: &str, drop: usize) -> Result<String> {
    let mut frames = encode_packet(text)?;
    let total = frames.len();
    log::info!("simulate: encoded {total} frames, will drop the first {drop}");
    frames.retain(|f| (f.frame_index as usize) >= drop);

    let mut decoder = MultiFrameDecoder::new();
    for f in frames {
        decoder.add_frame(f);
    }
    let decoded = decoder.decode()?;
    Ok(format!("sent {total} frames, dropped {drop}, recovered: {decoded:?}"))
}

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "One-way visual data channel codec", long_about = None)]
pub struct CommandLineOptions {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode text into the frames that make up one packet, printed as JSON.
    Encode { text: String },
    /// Decode a JSON array of frames (as emitted by `encode`) back to text.
    Decode {
        /// Path to a file containing the JSON frame array, or "-" for stdin.
        file: String,
    },
    /// Round-trip `text` through the encoder and decoder, dropping `--drop`
    /// frames first, to demonstrate erasure resilience.
    Simulate {
        text: String,
        #[arg(long, default_value_t = 0)]
        drop: usize,
    },
}

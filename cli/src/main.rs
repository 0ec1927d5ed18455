use aurora_cli::{options::CommandLineOptions, run};
use clap::Parser;

fn main() {
    aurora_logger::init();
    let opts = CommandLineOptions::parse();
    match run(opts.command) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

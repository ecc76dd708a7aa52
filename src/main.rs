use clap::Parser;
use std::io;
use std::process;
use wordiff::cli::{self, Cli};

fn main() {
    let opt = Cli::parse();
    cli::init_logging(opt.verbose.into());

    let isatty = atty::is(atty::Stream::Stdout);
    if let Err(err) = cli::execute(&opt, io::stdout().lock(), isatty) {
        eprintln!("wordiff: {}", err);
        process::exit(1);
    }
}

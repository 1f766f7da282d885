#![forbid(unsafe_code)]

use clap::Parser;

fn main() {
    quire_cli::logging::init_from_env();
    let cli = quire_cli::Cli::parse();
    let json = cli.wants_json();
    if let Err(error) = quire_cli::run(cli) {
        if json {
            eprintln!("{}", error.to_json());
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}

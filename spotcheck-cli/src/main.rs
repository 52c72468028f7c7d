//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = spotcheck_cli::run() {
        eprintln!("spotcheck: {err}");
        std::process::exit(1);
    }
}

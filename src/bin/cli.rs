// src/bin/cli.rs
use mp_scrape::cli;

fn main() {
    // Pretty panic reports; a navigation or parse failure that unwinds
    // should leave a readable trace, not a bare line number.
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: could not install error reporter: {e}");
    }

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

// src/cli.rs
use std::env;

/// No operational arguments: the target URL, store path and scroll
/// budget are compile-time constants (see config/consts.rs).
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    crate::runner::run().map(|_| ())
}

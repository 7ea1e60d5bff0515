use std::io;
use std::process::ExitCode;

use colored::Colorize;

fn main() -> ExitCode {
    animals::logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match animals::run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            ExitCode::FAILURE
        }
    }
}

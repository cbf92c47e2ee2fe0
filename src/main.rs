//! Library Manager - personal book catalog

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = library_manager::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

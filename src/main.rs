use clap::Parser;
use std::process::ExitCode;
use update_perl_version::args::Args;
use update_perl_version::updater;

fn main() -> ExitCode {
    let args = Args::parse();

    match updater::run(&args.module, &args.version) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

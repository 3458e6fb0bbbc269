// src/args.rs
use crate::updater::DEFAULT_MODULE_PATH;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "update_perl_version",
    version,
    about = "Update the $VERSION literal in a Perl module before packaging a release"
)]
pub struct Args {
    /// Next release version (e.g. 1.4.0)
    #[arg(id = "next_version", value_name = "VERSION")]
    pub version: String,

    /// Perl module containing the `our $VERSION = '...';` declaration
    #[arg(long, value_hint = ValueHint::FilePath, default_value = DEFAULT_MODULE_PATH)]
    pub module: PathBuf,
}

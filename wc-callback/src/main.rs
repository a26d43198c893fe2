mod error;
mod handlers;
mod middleware;
mod opts;
mod server;
mod util;

pub use crate::error::*;

use crate::opts::{Opts, Subcommand};
use clap::Parser;

fn main() -> Result<(), CallbackError> {
    let opts = Opts::parse();

    match opts.subcmd {
        Subcommand::Check(o) => crate::util::check(&o),
        Subcommand::Server(o) => crate::server::exec(o),
    }
}

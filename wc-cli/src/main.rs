mod decrypt;
mod encrypt;
mod opts;
mod util;

use crate::opts::{Opts, Subcommand};
use clap::Parser;

fn main() {
    let opts = Opts::parse();

    match opts.subcmd {
        Subcommand::Sign(o) => crate::util::sign(o),
        Subcommand::Verify(o) => crate::decrypt::verify(o),
        Subcommand::Dec(o) => crate::decrypt::exec(o),
        Subcommand::Enc(o) => crate::encrypt::exec(o),
        Subcommand::Gen => crate::util::gen(),
    }
}

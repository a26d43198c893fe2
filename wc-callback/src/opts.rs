use clap::{Parser, ValueHint};

/// Callback receiver for WorkChat applications.
#[derive(Parser, Debug)]
#[clap(name = "wc-callback", version = "0.1")]
pub struct Opts {
    #[clap(subcommand)]
    pub subcmd: Subcommand,
}

#[derive(Parser, Debug)]
pub enum Subcommand {
    Check(CheckOpts),
    Server(ServerOpts),
}

/// Check that a configuration file holds usable secrets.
#[derive(Parser, Debug)]
#[clap(name = "Check")]
pub struct CheckOpts {
    /// Path to the JSON configuration holding the shared secrets.
    #[clap(short, long, default_value = "./workchat.json", value_hint = ValueHint::FilePath)]
    pub config: String,
}

/// Run the callback HTTP service.
#[derive(Parser, Debug)]
#[clap(name = "Server")]
pub struct ServerOpts {
    /// Host to bind this service to.
    #[clap(short = 'H', long, default_value = "0.0.0.0", value_hint = ValueHint::Hostname)]
    pub host: String,

    /// Port to bind this service to.
    #[clap(short, long, default_value = "8088")]
    pub port: String,

    /// Path the platform posts callbacks to.
    #[clap(long, default_value = "/callback")]
    pub path: String,

    /// Path to the JSON configuration holding the shared secrets.
    #[clap(short, long, default_value = "./workchat.json", value_hint = ValueHint::FilePath)]
    pub config: String,
}

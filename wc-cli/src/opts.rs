use clap::{Parser, ValueEnum, ValueHint};

/// Command line interface for WorkChat callback messages.
#[derive(Parser, Debug)]
#[clap(name = "wc-cli", version = "0.1")]
pub struct Opts {
    #[clap(subcommand)]
    pub subcmd: Subcommand,
}

#[derive(Parser, Debug)]
pub enum Subcommand {
    Sign(SignOpts),
    Verify(VerifyOpts),
    Dec(DecOpts),
    Enc(EncOpts),
    /// Generate a fresh encoding key.
    Gen,
}

/// Compute a message signature.
#[derive(Parser, Debug)]
#[clap(name = "Sign")]
pub struct SignOpts {
    /// Signing token.
    #[clap(short, long)]
    pub token: String,

    #[clap(long)]
    pub timestamp: String,

    #[clap(long)]
    pub nonce: String,

    /// Base64 ciphertext, leave out for the signing-only form.
    #[clap(short, long)]
    pub encrypt: Option<String>,
}

/// Answer a URL verification request by decrypting its echo string.
#[derive(Parser, Debug)]
#[clap(name = "Verify")]
pub struct VerifyOpts {
    /// Path to the JSON configuration holding the shared secrets.
    #[clap(short, long, default_value = "./workchat.json", value_hint = ValueHint::FilePath)]
    pub config: String,

    #[clap(long)]
    pub msg_signature: String,

    #[clap(long)]
    pub timestamp: String,

    #[clap(long)]
    pub nonce: String,

    #[clap(long)]
    pub echostr: String,
}

/// Decrypt a message body.
#[derive(Parser, Debug)]
#[clap(name = "Decrypt")]
pub struct DecOpts {
    /// Input file holding the JSON message body, `-` for stdin.
    #[clap(index = 1, default_value = "-")]
    pub input: String,

    /// Path to the JSON configuration holding the shared secrets.
    #[clap(short, long, default_value = "./workchat.json", value_hint = ValueHint::FilePath)]
    pub config: String,

    #[clap(long)]
    pub msg_signature: String,

    #[clap(long)]
    pub timestamp: String,

    #[clap(long)]
    pub nonce: String,

    /// Expected receiver identifier, defaults to the configured one.
    #[clap(short, long)]
    pub receiver_id: Option<String>,
}

/// Output format of an encrypted reply.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

/// Encrypt and sign a reply.
#[derive(Parser, Debug)]
#[clap(name = "Encrypt")]
pub struct EncOpts {
    /// The plaintext reply.
    #[clap(index = 1)]
    pub reply: String,

    /// Path to the JSON configuration holding the shared secrets.
    #[clap(short, long, default_value = "./workchat.json", value_hint = ValueHint::FilePath)]
    pub config: String,

    /// Timestamp, defaults to now.
    #[clap(long)]
    pub timestamp: Option<String>,

    /// Nonce, defaults to a random number.
    #[clap(long)]
    pub nonce: Option<String>,

    #[clap(short, long, value_enum, default_value = "json")]
    pub format: Format,
}

use std::time::SystemTime;

use wc_core::artifacts::{AesKey, SharedSecrets};
use wc_core::client::MsgCrypt;
use wc_core::signature::compute_signature;

use crate::opts::SignOpts;

pub(crate) fn now() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_else(|e| fail(format!("System clock is before the epoch: {e}")))
        .as_secs()
}

/// Prints the error and exits.
pub(crate) fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

pub(crate) fn read_crypt(config: &str) -> MsgCrypt {
    let raw = std::fs::read_to_string(config)
        .unwrap_or_else(|e| fail(format!("Failed to read configuration {config}: {e}")));

    let secrets = SharedSecrets::from_json(&raw)
        .unwrap_or_else(|e| fail(format!("Failed to parse configuration {config}: {e}")));

    MsgCrypt::new(&secrets).unwrap_or_else(|e| fail(format!("Invalid encoding key: {e}")))
}

pub fn sign(sign_opts: SignOpts) {
    let SignOpts {
        token,
        timestamp,
        nonce,
        encrypt,
    } = sign_opts;

    println!(
        "{}",
        compute_signature(&token, &timestamp, &nonce, encrypt.as_deref())
    );
}

pub fn gen() {
    let mut rng = rand::thread_rng();

    println!("{}", AesKey::generate_encoding_key(&mut rng));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now() {
        // The platform's published sample timestamp lies in the past.
        assert!(now() > 1_409_659_589);
    }
}

use std::path::Path;

use wc_core::artifacts::SharedSecrets;
use wc_core::client::MsgCrypt;

use crate::opts::CheckOpts;
use crate::CallbackError;

pub fn current_time_u64() -> Result<u64, crate::Error> {
    let n = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|_e| crate::Error::Unexpected)?
        .as_secs();

    Ok(n)
}

/// Reads the shared secrets and derives the message crypt from them.
pub(crate) fn read_secrets(path: impl AsRef<Path>) -> Result<(SharedSecrets, MsgCrypt), CallbackError> {
    let raw = std::fs::read_to_string(path)?;

    let secrets = SharedSecrets::from_json(&raw)
        .map_err(|e| CallbackError::Setup(format!("could not parse secrets: {e}")))?;

    let crypt = MsgCrypt::new(&secrets)
        .map_err(|e| CallbackError::Setup(format!("could not derive key: {e}")))?;

    Ok((secrets, crypt))
}

pub fn check(check_opts: &CheckOpts) -> Result<(), CallbackError> {
    let (secrets, crypt) = read_secrets(&check_opts.config)?;

    println!(
        "Configuration {} is valid.\ncorp_id: {}\nreceiver_id: {}",
        check_opts.config,
        secrets.corp_id,
        crypt.receiver_id()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wc_core::test::*;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("wc-callback-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_secrets() {
        let path = write_config(
            "valid.json",
            &format!(
                r#"{{"corp_id":"{RECEIVER_ID}","token":"{TOKEN}","encoding_aes_key":"{ENCODING_AES_KEY}"}}"#
            ),
        );

        let (secrets, crypt) = read_secrets(&path).unwrap();
        assert_eq!(secrets.token, TOKEN);
        assert_eq!(crypt.receiver_id(), RECEIVER_ID);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_secrets_bad_key() {
        let path = write_config(
            "bad-key.json",
            &format!(r#"{{"corp_id":"{RECEIVER_ID}","token":"{TOKEN}","encoding_aes_key":"short"}}"#),
        );

        assert!(matches!(read_secrets(&path), Err(CallbackError::Setup(_))));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_secrets_missing_file() {
        assert!(matches!(
            read_secrets("/nonexistent/workchat.json"),
            Err(CallbackError::StdIO(_))
        ));
    }
}

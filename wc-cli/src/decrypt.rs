use std::io::Read;

use wc_core::api::RecvMessage;

use crate::opts::{DecOpts, VerifyOpts};
use crate::util::{fail, read_crypt};

pub fn verify(verify_opts: VerifyOpts) {
    let VerifyOpts {
        config,
        msg_signature,
        timestamp,
        nonce,
        echostr,
    } = verify_opts;

    let crypt = read_crypt(&config);

    match crypt.verify_url(&msg_signature, &timestamp, &nonce, &echostr) {
        Ok(echo) => println!("{echo}"),
        Err(e) => fail(format!("Verification failed: {e}")),
    }
}

pub fn exec(dec_opts: DecOpts) {
    let DecOpts {
        input,
        config,
        msg_signature,
        timestamp,
        nonce,
        receiver_id,
    } = dec_opts;

    let crypt = read_crypt(&config);

    let mut raw = String::new();
    let read = if input == "-" {
        std::io::stdin().read_to_string(&mut raw)
    } else {
        std::fs::File::open(&input).and_then(|mut f| f.read_to_string(&mut raw))
    };
    if let Err(e) = read {
        fail(format!("Failed to read {input}: {e}"));
    }

    let msg: RecvMessage = match serde_json::from_str(&raw) {
        Ok(msg) => msg,
        Err(e) => fail(format!("Failed to parse message body: {e}\nInput was: {raw}")),
    };

    let expected = receiver_id.unwrap_or_else(|| crypt.receiver_id().to_string());

    eprintln!("Decrypting message for agent {}...", msg.agentid);

    match crypt.verify_and_decrypt(
        &msg_signature,
        &timestamp,
        &nonce,
        &msg.encrypt,
        Some(expected.as_str()),
    ) {
        Ok(payload) => println!("{}", String::from_utf8_lossy(&payload)),
        Err(e) => fail(format!("Decryption failed: {e}")),
    }
}

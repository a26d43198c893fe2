use rand::Rng;

use crate::opts::{EncOpts, Format};
use crate::util::{fail, now, read_crypt};

pub fn exec(enc_opts: EncOpts) {
    let mut rng = rand::thread_rng();

    let EncOpts {
        reply,
        config,
        timestamp,
        nonce,
        format,
    } = enc_opts;

    let crypt = read_crypt(&config);

    let timestamp = timestamp.unwrap_or_else(|| now().to_string());
    let nonce = nonce.unwrap_or_else(|| rng.gen_range(100_000_000u32..1_000_000_000).to_string());

    eprintln!("Encrypting reply for {}...", crypt.receiver_id());

    let msg = crypt
        .encrypt_msg(&mut rng, &reply, &timestamp, &nonce)
        .unwrap_or_else(|e| fail(format!("Encryption failed: {e}")));

    match format {
        Format::Json => match msg.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => fail(e),
        },
        Format::Xml => println!("{}", msg.to_xml()),
    }
}

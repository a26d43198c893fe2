//! # WorkChat core library
#![deny(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! The platform pushes callbacks to applications over plain HTTP. Every callback is signed and
//! encrypted with secrets shared between the platform and the application:
//!
//! * a signing token,
//! * a 43 character base64 encoding key, from which an AES-256 key is derived,
//! * the corp (receiver) identifier.
//!
//! This library implements both directions of that exchange:
//!
//! * Inbound: verify the SHA-1 signature over the sorted parameters, decrypt the AES-256-CBC
//! ciphertext and unpack the plaintext envelope, checking the receiver identifier. This is used
//! for the URL verification handshake as well as for regular messages.
//!
//! * Outbound: pack a reply into an envelope, encrypt and sign it, yielding an
//! [`EncryptedMessage`][`api::EncryptedMessage`] for the platform.
//!
//! All operations are synchronous and free of shared mutable state.
//!
//! ## Examples
//!
//! ### URL verification handshake
//!
//! ```
//! use wc_core::artifacts::SharedSecrets;
//! use wc_core::client::MsgCrypt;
//! # use wc_core::error::Error;
//!
//! # fn main() -> Result<(), Error> {
//! let secrets = SharedSecrets {
//!     corp_id: "wx5823bf96d3bd56c7".to_string(),
//!     token: "QDG6eK".to_string(),
//!     encoding_aes_key: "jWmYm7qr5nMoAUwZRjGtBxmz3KA1tkAj3ykkR6q2B2C".to_string(),
//!     receiver_id: String::new(),
//! };
//!
//! let crypt = MsgCrypt::new(&secrets)?;
//!
//! // GET /callback?msg_signature=...&timestamp=...&nonce=...&echostr=...
//! let echo = crypt.verify_url(
//!     "5c45ff5e21c57e6ad56bac8758b79b1d9ac89fd3",
//!     "1409659589",
//!     "263014780",
//!     "P9nAzCzyDtyTWESHep1vC5X9xho/qYX3Zpb4yKa9SKld1DsH3Iyt3tP3zNdtp+4RPcs8TgAE7OaBO+FZXvnaqQ==",
//! )?;
//!
//! assert_eq!(echo, "1616140317555161061");
//! # Ok(())
//! # }
//! ```
//!
//! ### Replying to a message
//!
//! ```
//! # use wc_core::test::TestSetup;
//! # use wc_core::error::Error;
//! # fn main() -> Result<(), Error> {
//! # let crypt = TestSetup::new().crypt;
//! let mut rng = rand::thread_rng();
//!
//! let reply = crypt.encrypt_msg(&mut rng, "hello", "1409659589", "263014780")?;
//! let payload = crypt.verify_and_decrypt(
//!     &reply.signature,
//!     &reply.timestamp,
//!     &reply.nonce,
//!     &reply.encrypt,
//!     Some(crypt.receiver_id()),
//! )?;
//!
//! assert_eq!(payload, b"hello");
//! # Ok(())
//! # }
//! ```
//!
//! ### Wire format
//!
//! The plaintext envelope consists of the following segments, followed by their length in bytes:
//!
//! ```text
//!                  ENVELOPE
//! = RANDOM (16) || PAYLOAD LEN (4) || PAYLOAD (*) || RECEIVER ID (*)
//!
//!                  CIPHERTEXT
//! = Base64(AES-256-CBC(KEY, IV = KEY[..16], ENVELOPE || PADDING (1..=32)))
//!
//!                  SIGNATURE
//! = Hex(SHA-1(Sort(TOKEN, TIMESTAMP, NONCE, CIPHERTEXT)))
//! ```

pub mod api;
pub mod artifacts;
pub mod cipher;
pub mod client;
pub mod consts;
pub mod envelope;
pub mod error;
pub mod padding;
pub mod signature;

#[doc(hidden)]
pub use consts::*;

//! Definitions of the messages exchanged with the platform.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The query parameters of a callback request.
///
/// During the URL verification handshake the request carries an `echostr`, for regular messages
/// the ciphertext travels in the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallbackQuery {
    /// Hex SHA-1 signature.
    pub msg_signature: String,

    /// Decimal timestamp.
    pub timestamp: String,

    /// The nonce.
    pub nonce: String,

    /// The encrypted echo string, only present during the handshake.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub echostr: Option<String>,
}

/// An encrypted inbound message body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecvMessage {
    /// The receiving corp.
    #[serde(default)]
    pub tousername: String,

    /// The base64 ciphertext.
    pub encrypt: String,

    /// The application that received the message.
    #[serde(default)]
    pub agentid: String,
}

/// An encrypted outbound message, ready to be sent to the platform.
///
/// The field names are dictated by the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncryptedMessage {
    /// The base64 ciphertext.
    pub encrypt: String,

    /// Hex SHA-1 signature over the token, timestamp, nonce and ciphertext.
    #[serde(rename = "msgsignature")]
    pub signature: String,

    /// Decimal timestamp.
    pub timestamp: String,

    /// The nonce.
    pub nonce: String,
}

impl EncryptedMessage {
    /// Serializes the message to its JSON representation.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the message in the XML reply format.
    pub fn to_xml(&self) -> String {
        format!(
            "<xml>\
             <Encrypt><![CDATA[{}]]></Encrypt>\
             <MsgSignature><![CDATA[{}]]></MsgSignature>\
             <TimeStamp>{}</TimeStamp>\
             <Nonce><![CDATA[{}]]></Nonce>\
             </xml>",
            self.encrypt, self.signature, self.timestamp, self.nonce
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> EncryptedMessage {
        EncryptedMessage {
            encrypt: "c2VjcmV0".to_string(),
            signature: "5c45ff5e21c57e6ad56bac8758b79b1d9ac89fd3".to_string(),
            timestamp: "1409659589".to_string(),
            nonce: "263014780".to_string(),
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = message().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"encrypt":"c2VjcmV0","msgsignature":"5c45ff5e21c57e6ad56bac8758b79b1d9ac89fd3","timestamp":"1409659589","nonce":"263014780"}"#
        );
    }

    #[test]
    fn test_xml() {
        assert_eq!(
            message().to_xml(),
            "<xml><Encrypt><![CDATA[c2VjcmV0]]></Encrypt>\
             <MsgSignature><![CDATA[5c45ff5e21c57e6ad56bac8758b79b1d9ac89fd3]]></MsgSignature>\
             <TimeStamp>1409659589</TimeStamp>\
             <Nonce><![CDATA[263014780]]></Nonce></xml>"
        );
    }

    #[test]
    fn test_recv_message() {
        let msg: RecvMessage = serde_json::from_str(
            r#"{"tousername":"wx5823bf96d3bd56c7","encrypt":"c2VjcmV0","agentid":"218"}"#,
        )
        .unwrap();
        assert_eq!(msg.encrypt, "c2VjcmV0");
        assert_eq!(msg.agentid, "218");

        let minimal: RecvMessage = serde_json::from_str(r#"{"encrypt":"c2VjcmV0"}"#).unwrap();
        assert!(minimal.tousername.is_empty());
    }
}

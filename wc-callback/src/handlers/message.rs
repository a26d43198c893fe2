use crate::util::current_time_u64;
use crate::Error;
use actix_web::{web::Data, web::Json, web::Query, HttpResponse};
use wc_core::api::{CallbackQuery, RecvMessage};
use wc_core::client::MsgCrypt;

/// Consumes decrypted inbound messages.
pub trait MessageHandler: Send + Sync {
    /// Handles a decrypted message body, optionally returning a plaintext reply.
    fn handle(&self, agent_id: &str, payload: &[u8]) -> Option<String>;
}

/// Logs every message and never replies.
#[derive(Debug, Default)]
pub struct LogHandler;

impl MessageHandler for LogHandler {
    fn handle(&self, agent_id: &str, payload: &[u8]) -> Option<String> {
        log::info!("message for agent {agent_id}: {} bytes", payload.len());
        None
    }
}

/// Decrypts an inbound message and encrypts the reply of the [`MessageHandler`], if any.
pub async fn message(
    crypt: Data<MsgCrypt>,
    handler: Data<dyn MessageHandler>,
    query: Query<CallbackQuery>,
    body: Json<RecvMessage>,
) -> Result<HttpResponse, Error> {
    let CallbackQuery {
        msg_signature,
        timestamp,
        nonce,
        ..
    } = query.into_inner();
    let body = body.into_inner();

    let payload = crypt
        .decrypt_msg(&msg_signature, &timestamp, &nonce, &body)
        .map_err(|e| {
            log::warn!("could not decrypt message for agent {}: {e}", body.agentid);
            Error::Core(e)
        })?;

    let reply = match handler.handle(&body.agentid, &payload) {
        Some(reply) => reply,
        None => return Ok(HttpResponse::Ok().content_type("text/plain").body("success")),
    };

    let mut rng = rand::thread_rng();
    let now = current_time_u64()?.to_string();
    let encrypted = crypt.encrypt_msg(&mut rng, &reply, &now, &nonce)?;

    Ok(HttpResponse::Ok().json(encrypted))
}

use crate::Error;
use actix_web::http::header::ContentType;
use actix_web::{web::Data, web::Query, HttpResponse};
use wc_core::api::CallbackQuery;
use wc_core::client::MsgCrypt;

/// Answers the URL verification handshake with the decrypted echo string.
pub async fn verify(crypt: Data<MsgCrypt>, query: Query<CallbackQuery>) -> Result<HttpResponse, Error> {
    let CallbackQuery {
        msg_signature,
        timestamp,
        nonce,
        echostr,
    } = query.into_inner();

    // An unescaped '+' arrives as a space, base64 never contains spaces.
    let echostr = echostr.ok_or(Error::MissingEchoStr)?.replace(' ', "+");

    let echo = crypt
        .verify_url(&msg_signature, &timestamp, &nonce, &echostr)
        .map_err(|e| {
            log::warn!("url verification failed: {e}");
            Error::Core(e)
        })?;

    log::info!("callback url verified");

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(echo))
}

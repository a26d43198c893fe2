use crate::server::WORKCHAT_CALLBACKS;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceRequest, ServiceResponse},
    http::Method,
};
use futures::Future;
use futures_util::future::FutureExt;

pub(crate) fn collect_metrics<
    B: MessageBody,
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
>(
    req: ServiceRequest,
    srv: &S,
) -> impl Future<Output = Result<ServiceResponse<B>, actix_web::Error>> {
    let path = req.match_pattern().unwrap_or_else(|| req.path().to_string());
    let kind = if req.method() == Method::GET {
        "handshake"
    } else {
        "message"
    };

    srv.call(req).map(move |res| {
        let status = match &res {
            Ok(resp) => resp.status(),
            Err(e) => e.as_response_error().status_code(),
        };

        WORKCHAT_CALLBACKS
            .with_label_values(&[path.as_str(), kind, status.as_str()])
            .inc();

        res
    })
}

#[cfg(test)]
mod tests {
    use crate::handlers::LogHandler;
    use crate::server::tests::{escape, setup_with};
    use actix_http::StatusCode;
    use actix_web::test;
    use std::sync::Arc;
    use wc_core::test::*;

    #[actix_web::test]
    async fn test_get_metrics() {
        // A path of its own, the registry is shared with the other tests.
        let app = setup_with("/metrics-probe", Arc::new(LogHandler)).await;

        let ok = format!(
            "/metrics-probe?msg_signature={SAMPLE_SIGNATURE}&timestamp={TIMESTAMP}&nonce={NONCE}&echostr={}",
            escape(SAMPLE_ECHOSTR)
        );
        let bad = format!(
            "/metrics-probe?msg_signature={HELLO_SIGNATURE}&timestamp={TIMESTAMP}&nonce={NONCE}&echostr={}",
            escape(SAMPLE_ECHOSTR)
        );

        for uri in [&ok, &ok, &bad] {
            let req = test::TestRequest::get().uri(uri).to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).unwrap();

        assert!(body.contains(
            "workchat_callbacks{kind=\"handshake\",path=\"/metrics-probe\",status=\"200\"} 2\n"
        ));
        assert!(body.contains(
            "workchat_callbacks{kind=\"handshake\",path=\"/metrics-probe\",status=\"401\"} 1\n"
        ));
    }
}

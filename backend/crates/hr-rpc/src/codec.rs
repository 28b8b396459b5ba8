use crate::RpcError;

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use prost::Message;

pub const PROTO_CONTENT_TYPE: &str = "application/proto";

/// Binary protobuf request/response body.
///
/// As an extractor it must be the last handler argument since it consumes
/// the body.
#[derive(Debug, Clone, Default)]
pub struct Proto<T>(pub T);

impl<T, S> FromRequest<S> for Proto<T>
where
    T: Message + Default,
    S: Send + Sync,
{
    type Rejection = RpcError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get(CONTENT_TYPE)
            && !is_proto_content_type(content_type)
        {
            return Err(RpcError::invalid_argument(format!(
                "unsupported content-type, expected {PROTO_CONTENT_TYPE}"
            )));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| RpcError::invalid_argument(format!("unreadable request body: {e}")))?;

        Ok(Proto(T::decode(body)?))
    }
}

impl<T: Message> IntoResponse for Proto<T> {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(CONTENT_TYPE, HeaderValue::from_static(PROTO_CONTENT_TYPE))],
            self.0.encode_to_vec(),
        )
            .into_response()
    }
}

fn is_proto_content_type(value: &HeaderValue) -> bool {
    let Ok(value) = value.to_str() else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case(PROTO_CONTENT_TYPE)
        || mime.eq_ignore_ascii_case("application/x-protobuf")
}

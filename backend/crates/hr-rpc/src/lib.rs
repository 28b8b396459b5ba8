//! Connect-style unary RPC over HTTP for the `healthrecords.v1` services.
//!
//! Every procedure is `POST /<package>.<Service>/<Method>` with a binary
//! protobuf body. Successful calls answer `200 application/proto`; failures
//! answer a JSON `{"code", "message"}` body with the matching HTTP status.

pub mod app_state;
pub mod codec;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod pagination;
pub mod procedures;
pub mod request_context;
pub mod response_builder;
pub mod router;

pub use app_state::{AppState, build_interceptor};
pub use codec::{PROTO_CONTENT_TYPE, Proto};
pub use error::{Code, Result, RpcError, RpcErrorBody};
pub use extractors::current_user::CurrentUser;
pub use metrics::Metrics;
pub use middleware::authentication::authenticate;
pub use middleware::deadline::enforce_deadline;
pub use middleware::request_tracking::track_request;
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use request_context::{REQUEST_ID_HEADER, RequestContext};
pub use router::build_rpc_router;

use crate::handlers::{articles, blood_pressure, users, weight_entries};
use crate::{AppState, RpcError, authenticate, enforce_deadline, procedures, track_request};

use std::panic::Location;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::post;
use error_location::ErrorLocation;
use http::Uri;

/// Build the RPC router.
///
/// Layer order, outermost first: request tracking, deadline, then (matched
/// procedures only) authentication. Unknown procedures answer
/// `unimplemented` without touching authentication.
pub fn build_rpc_router(state: AppState) -> Router {
    Router::new()
        .route(procedures::GET_CURRENT_USER, post(users::get_current_user))
        .route(
            procedures::CREATE_WEIGHT_ENTRY,
            post(weight_entries::create_weight_entry),
        )
        .route(
            procedures::GET_WEIGHT_ENTRY,
            post(weight_entries::get_weight_entry),
        )
        .route(
            procedures::LIST_WEIGHT_ENTRIES,
            post(weight_entries::list_weight_entries),
        )
        .route(
            procedures::DELETE_WEIGHT_ENTRY,
            post(weight_entries::delete_weight_entry),
        )
        .route(
            procedures::CREATE_BLOOD_PRESSURE_READING,
            post(blood_pressure::create_reading),
        )
        .route(
            procedures::LIST_BLOOD_PRESSURE_READINGS,
            post(blood_pressure::list_readings),
        )
        .route(
            procedures::DELETE_BLOOD_PRESSURE_READING,
            post(blood_pressure::delete_reading),
        )
        .route(procedures::LIST_ARTICLES, post(articles::list_articles))
        .route(procedures::GET_ARTICLE, post(articles::get_article))
        .route_layer(from_fn_with_state(state.clone(), authenticate))
        .fallback(unimplemented_procedure)
        .layer(from_fn_with_state(state.clone(), enforce_deadline))
        .layer(from_fn_with_state(state.clone(), track_request))
        .with_state(state)
}

async fn unimplemented_procedure(uri: Uri) -> RpcError {
    RpcError::Unimplemented {
        procedure: uri.path().to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

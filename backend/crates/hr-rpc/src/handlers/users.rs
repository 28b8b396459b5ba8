use crate::response_builder::user_to_proto;
use crate::{AppState, CurrentUser, Proto, RequestContext, Result as RpcErrorResult, RpcError};

use hr_db::UserRepository;
use hr_proto::{GetCurrentUserRequest, GetCurrentUserResponse};

use axum::extract::State;
use log::debug;

/// Handle GetCurrentUser
pub async fn get_current_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentUser(user_id): CurrentUser,
    Proto(_req): Proto<GetCurrentUserRequest>,
) -> RpcErrorResult<Proto<GetCurrentUserResponse>> {
    debug!("{} GetCurrentUser starting", ctx.log_prefix());

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| RpcError::internal(format!("resolved user {user_id} is missing")))?;

    Ok(Proto(GetCurrentUserResponse {
        user: Some(user_to_proto(&user)),
    }))
}

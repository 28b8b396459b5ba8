use crate::handlers::{parse_id, parse_measured_at};
use crate::response_builder::weight_entry_to_proto;
use crate::{
    AppState, CurrentUser, PageRequest, Proto, RequestContext, Result as RpcErrorResult, RpcError,
};

use hr_core::WeightEntry;
use hr_db::WeightEntryRepository;
use hr_proto::{
    CreateWeightEntryRequest, CreateWeightEntryResponse, DeleteWeightEntryRequest,
    DeleteWeightEntryResponse, GetWeightEntryRequest, GetWeightEntryResponse,
    ListWeightEntriesRequest, ListWeightEntriesResponse,
};

use axum::extract::State;
use log::{debug, info};

/// Handle CreateWeightEntry
pub async fn create_weight_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentUser(user_id): CurrentUser,
    Proto(req): Proto<CreateWeightEntryRequest>,
) -> RpcErrorResult<Proto<CreateWeightEntryResponse>> {
    debug!("{} CreateWeightEntry starting", ctx.log_prefix());

    // 1. Build and validate
    let measured_at = parse_measured_at(req.measured_at)?;
    let note = req.note.filter(|n| !n.trim().is_empty());
    let entry = WeightEntry::new(user_id, req.weight_kg, measured_at, note);
    entry.validate()?;

    // 2. Persist
    WeightEntryRepository::new(state.pool.clone())
        .create(&entry)
        .await?;

    info!("{} Created weight entry {}", ctx.log_prefix(), entry.id);

    Ok(Proto(CreateWeightEntryResponse {
        entry: Some(weight_entry_to_proto(&entry)),
    }))
}

/// Handle GetWeightEntry
pub async fn get_weight_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentUser(user_id): CurrentUser,
    Proto(req): Proto<GetWeightEntryRequest>,
) -> RpcErrorResult<Proto<GetWeightEntryResponse>> {
    debug!("{} GetWeightEntry starting", ctx.log_prefix());

    let id = parse_id("id", &req.id)?;

    // Another user's entry is indistinguishable from a missing one
    let entry = WeightEntryRepository::new(state.pool.clone())
        .find_for_user(id, user_id)
        .await?
        .ok_or_else(|| RpcError::not_found(format!("weight entry {id} not found")))?;

    Ok(Proto(GetWeightEntryResponse {
        entry: Some(weight_entry_to_proto(&entry)),
    }))
}

/// Handle ListWeightEntries
pub async fn list_weight_entries(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentUser(user_id): CurrentUser,
    Proto(req): Proto<ListWeightEntriesRequest>,
) -> RpcErrorResult<Proto<ListWeightEntriesResponse>> {
    debug!("{} ListWeightEntries starting", ctx.log_prefix());

    let page = PageRequest::parse(req.page_size, &req.page_token)?;

    let rows = WeightEntryRepository::new(state.pool.clone())
        .list_for_user(user_id, page.offset, page.fetch_limit())
        .await?;
    let (entries, next_page_token) = page.finish(rows);

    debug!(
        "{} Returning {} weight entries",
        ctx.log_prefix(),
        entries.len()
    );

    Ok(Proto(ListWeightEntriesResponse {
        entries: entries.iter().map(weight_entry_to_proto).collect(),
        next_page_token,
    }))
}

/// Handle DeleteWeightEntry
pub async fn delete_weight_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentUser(user_id): CurrentUser,
    Proto(req): Proto<DeleteWeightEntryRequest>,
) -> RpcErrorResult<Proto<DeleteWeightEntryResponse>> {
    debug!("{} DeleteWeightEntry starting", ctx.log_prefix());

    let id = parse_id("id", &req.id)?;

    let deleted = WeightEntryRepository::new(state.pool.clone())
        .delete_for_user(id, user_id)
        .await?;
    if !deleted {
        return Err(RpcError::not_found(format!("weight entry {id} not found")));
    }

    info!("{} Deleted weight entry {}", ctx.log_prefix(), id);

    Ok(Proto(DeleteWeightEntryResponse {}))
}

use crate::handlers::{parse_id, parse_measured_at};
use crate::response_builder::reading_to_proto;
use crate::{
    AppState, CurrentUser, PageRequest, Proto, RequestContext, Result as RpcErrorResult, RpcError,
};

use hr_core::BloodPressureReading;
use hr_db::BloodPressureReadingRepository;
use hr_proto::{
    CreateBloodPressureReadingRequest, CreateBloodPressureReadingResponse,
    DeleteBloodPressureReadingRequest, DeleteBloodPressureReadingResponse,
    ListBloodPressureReadingsRequest, ListBloodPressureReadingsResponse,
};

use axum::extract::State;
use log::{debug, info};

/// Handle CreateBloodPressureReading
pub async fn create_reading(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentUser(user_id): CurrentUser,
    Proto(req): Proto<CreateBloodPressureReadingRequest>,
) -> RpcErrorResult<Proto<CreateBloodPressureReadingResponse>> {
    debug!("{} CreateBloodPressureReading starting", ctx.log_prefix());

    let measured_at = parse_measured_at(req.measured_at)?;
    let reading =
        BloodPressureReading::new(user_id, req.systolic, req.diastolic, req.pulse, measured_at);
    reading.validate()?;

    BloodPressureReadingRepository::new(state.pool.clone())
        .create(&reading)
        .await?;

    info!("{} Created reading {}", ctx.log_prefix(), reading.id);

    Ok(Proto(CreateBloodPressureReadingResponse {
        reading: Some(reading_to_proto(&reading)),
    }))
}

/// Handle ListBloodPressureReadings
pub async fn list_readings(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentUser(user_id): CurrentUser,
    Proto(req): Proto<ListBloodPressureReadingsRequest>,
) -> RpcErrorResult<Proto<ListBloodPressureReadingsResponse>> {
    debug!("{} ListBloodPressureReadings starting", ctx.log_prefix());

    let page = PageRequest::parse(req.page_size, &req.page_token)?;

    let rows = BloodPressureReadingRepository::new(state.pool.clone())
        .list_for_user(user_id, page.offset, page.fetch_limit())
        .await?;
    let (readings, next_page_token) = page.finish(rows);

    Ok(Proto(ListBloodPressureReadingsResponse {
        readings: readings.iter().map(reading_to_proto).collect(),
        next_page_token,
    }))
}

/// Handle DeleteBloodPressureReading
pub async fn delete_reading(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentUser(user_id): CurrentUser,
    Proto(req): Proto<DeleteBloodPressureReadingRequest>,
) -> RpcErrorResult<Proto<DeleteBloodPressureReadingResponse>> {
    debug!("{} DeleteBloodPressureReading starting", ctx.log_prefix());

    let id = parse_id("id", &req.id)?;

    let deleted = BloodPressureReadingRepository::new(state.pool.clone())
        .delete_for_user(id, user_id)
        .await?;
    if !deleted {
        return Err(RpcError::not_found(format!("reading {id} not found")));
    }

    info!("{} Deleted reading {}", ctx.log_prefix(), id);

    Ok(Proto(DeleteBloodPressureReadingResponse {}))
}

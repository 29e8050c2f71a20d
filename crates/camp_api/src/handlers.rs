use crate::dto::{CreateCamperBody, CreateSignupBody, PatchCamperBody};
use crate::error::ApiError;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camp_core::{
    Activity, ActivityService, Camper, CamperDetail, CamperService, EntityKind, SignupDetail,
    SignupService, SqliteActivityRepository, SqliteCamperRepository, SqliteSignupRepository,
};

type ApiResult<T> = Result<T, ApiError>;

/// An unparseable id can never match a row.
fn entity_id(path: Result<Path<i64>, PathRejection>, kind: EntityKind) -> ApiResult<i64> {
    path.map(|Path(id)| id).map_err(|_| ApiError::NotFound(kind))
}

/// # GET /
pub async fn home() -> &'static str {
    ""
}

/// # GET /campers
pub async fn list_campers(State(state): State<AppState>) -> ApiResult<Json<Vec<Camper>>> {
    let campers = state.with_conn(|conn| {
        let service = CamperService::new(SqliteCamperRepository::try_new(conn)?);
        Ok(service.list_campers()?)
    })?;
    Ok(Json(campers))
}

/// # GET /campers/:id
/// Camper with its signups; each signup embeds its activity.
pub async fn get_camper(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<CamperDetail>> {
    let id = entity_id(path, EntityKind::Camper)?;
    let detail = state.with_conn(|conn| {
        let service = CamperService::new(SqliteCamperRepository::try_new(conn)?);
        service
            .get_camper_detail(id)?
            .ok_or(ApiError::NotFound(EntityKind::Camper))
    })?;
    Ok(Json(detail))
}

/// # POST /campers
pub async fn create_camper(
    State(state): State<AppState>,
    payload: Result<Json<CreateCamperBody>, JsonRejection>,
) -> ApiResult<Json<Camper>> {
    let Json(body) = payload?;
    let new_camper = body.into_new_camper()?;
    let camper = state.with_conn(|conn| {
        let service = CamperService::new(SqliteCamperRepository::try_new(conn)?);
        Ok(service.create_camper(&new_camper)?)
    })?;
    Ok(Json(camper))
}

/// # PATCH /campers/:id
/// Only keys present in the body are changed. A missing camper wins over
/// an invalid body.
pub async fn update_camper(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PatchCamperBody>, JsonRejection>,
) -> ApiResult<Json<Camper>> {
    let id = entity_id(path, EntityKind::Camper)?;
    let camper = state.with_conn(|conn| {
        let service = CamperService::new(SqliteCamperRepository::try_new(conn)?);
        if service.get_camper(id)?.is_none() {
            return Err(ApiError::NotFound(EntityKind::Camper));
        }
        let Json(body) = payload?;
        let patch = body.into_patch()?;
        Ok(service.update_camper(id, &patch)?)
    })?;
    Ok(Json(camper))
}

/// # GET /activities
pub async fn list_activities(State(state): State<AppState>) -> ApiResult<Json<Vec<Activity>>> {
    let activities = state.with_conn(|conn| {
        let service = ActivityService::new(SqliteActivityRepository::try_new(conn)?);
        Ok(service.list_activities()?)
    })?;
    Ok(Json(activities))
}

/// # DELETE /activities/:id
/// Cascades to the activity's signups.
pub async fn delete_activity(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = entity_id(path, EntityKind::Activity)?;
    state.with_conn(|conn| {
        let service = ActivityService::new(SqliteActivityRepository::try_new(conn)?);
        Ok(service.delete_activity(id)?)
    })?;
    Ok(StatusCode::NO_CONTENT)
}

/// # POST /signups
pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<CreateSignupBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SignupDetail>)> {
    let Json(body) = payload?;
    let new_signup = body.into_new_signup()?;
    let signup = state.with_conn(|conn| {
        let service = SignupService::new(SqliteSignupRepository::try_new(conn)?);
        Ok(service.create_signup(&new_signup)?)
    })?;
    Ok((StatusCode::CREATED, Json(signup)))
}

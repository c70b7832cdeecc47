use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use sea_orm::DbErr;
use serde_json::{json, Value};
use tracing::info;
use validator::Validate;

use crate::{
    adverts::{
        payload::{CreateAdvert, UpdateAdvert},
        repository,
        view::AdvertView,
    },
    api::{JsonError, OptionalJson, RequestError, RequestResult, ValidatedJson},
    app::App,
    auth::prelude::*,
    database::models::advert,
    ids::AdvertId,
};

const ADVERT_DOES_NOT_EXIST: &str = "Advert does not exist";
const ADVERT_NOT_FOUND: &str = "Advert not found";

fn parse_advert_id(raw: &str) -> RequestResult<AdvertId> {
    raw.parse()
        .map_err(|_| RequestError::bad_request("Invalid advert id"))
}

async fn load_advert(app: &App, id: AdvertId, missing: &str) -> RequestResult<advert::Model> {
    repository::find(&app.db, id)
        .await?
        .ok_or_else(|| RequestError::not_found(missing))
}

/// `GET /api/adverts`
pub async fn index(State(app): State<App>) -> RequestResult<Json<Vec<AdvertView>>> {
    let adverts = repository::list(&app.db, &AdvertPolicy::anonymous()).await?;

    Ok(Json(adverts.into_iter().map(AdvertView::from).collect()))
}

/// `GET /api/adverts/{id}`
pub async fn show(
    State(app): State<App>,
    Path(id): Path<String>,
) -> RequestResult<Json<AdvertView>> {
    let id = parse_advert_id(&id)?;
    let advert = load_advert(&app, id, ADVERT_DOES_NOT_EXIST).await?;

    authorize!(AdvertPolicy::anonymous(), read, &advert);

    Ok(Json(advert.into()))
}

/// `POST /api/adverts`
pub async fn create(
    State(app): State<App>,
    current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateAdvert>,
) -> RequestResult<Json<AdvertView>> {
    let policy = AdvertPolicy::for_user(&current_user);
    authorize!(policy, create);

    // `None` only for payloads `ValidatedJson` has already turned away
    let new_advert = payload
        .into_new_advert()
        .ok_or_else(|| RequestError::bad_request("Invalid advert"))?;

    let advert = repository::insert(&app.db, current_user.id(), new_advert, Utc::now()).await?;

    info!(advert_id = %advert.id, owner = %advert.owner_id, "Advert created");

    Ok(Json(advert.into()))
}

/// `PUT /api/adverts/{id}`
///
/// Ownership is checked before the body is looked at, so a stranger gets 401
/// whatever they send.
pub async fn update(
    State(app): State<App>,
    current_user: CurrentUser,
    Path(id): Path<String>,
    payload: Result<OptionalJson<UpdateAdvert>, JsonError>,
) -> RequestResult<Json<AdvertView>> {
    let id = parse_advert_id(&id)?;
    let advert = load_advert(&app, id, ADVERT_NOT_FOUND).await?;

    let policy = AdvertPolicy::for_user(&current_user);
    authorize!(policy, update, &advert);

    let OptionalJson(payload) = payload?;
    payload.validate().map_err(JsonError::ValidationError)?;

    let advert = match repository::update(&app.db, advert, payload.into_patch()).await {
        Ok(advert) => advert,
        Err(DbErr::RecordNotUpdated) => return Err(RequestError::not_found(ADVERT_NOT_FOUND)),
        Err(err) => return Err(err.into()),
    };

    info!(advert_id = %advert.id, "Advert updated");

    Ok(Json(advert.into()))
}

/// `DELETE /api/adverts/{id}`
pub async fn destroy(
    State(app): State<App>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> RequestResult<Json<Value>> {
    let id = parse_advert_id(&id)?;
    let advert = load_advert(&app, id, ADVERT_DOES_NOT_EXIST).await?;

    let policy = AdvertPolicy::for_user(&current_user);
    authorize!(policy, delete, &advert);

    if !repository::delete(&app.db, id).await? {
        return Err(RequestError::not_found(ADVERT_DOES_NOT_EXIST));
    }

    info!(advert_id = %id, owner = %current_user.id(), "Advert removed");

    Ok(Json(json!({ "msg": "Advert Removed" })))
}

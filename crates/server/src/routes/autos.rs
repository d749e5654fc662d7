use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, error};

use models::automobile::NewAutomobile;
use service::errors::ServiceError;

use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    pub color: Option<String>,
    pub make: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateAutoInput {
    pub price: Option<i64>,
    pub preowned: Option<String>,
    pub grade: Option<String>,
}

#[utoipa::path(
    get, path = "/autos", tag = "autos",
    params(ListQuery),
    responses(
        (status = 200, description = "Inventory list"),
        (status = 204, description = "No matching automobiles"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Response, JsonApiError> {
    let result = if q.color.is_none() && q.make.is_none() {
        state.autos.get_autos().await
    } else {
        state
            .autos
            .search_autos(q.color.as_deref().unwrap_or_default(), q.make.as_deref().unwrap_or_default())
            .await
    };
    match result {
        Ok(list) if list.is_empty() => Ok(StatusCode::NO_CONTENT.into_response()),
        Ok(list) => {
            info!(count = list.len(), "list automobiles");
            Ok((StatusCode::OK, Json(list)).into_response())
        }
        Err(e) => {
            error!(err = %e, "list automobiles failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    post, path = "/autos", tag = "autos",
    request_body = crate::openapi::NewAutomobileDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewAutomobile>,
) -> Result<Json<models::automobile::Model>, JsonApiError> {
    info!(vin = %input.vin, make = %input.make, model = %input.model, "automobile_create_request");

    match state.autos.add_auto(&input).await {
        Ok(m) => Ok(Json(m)),
        Err(e) => match e {
            ServiceError::Validation(_) | ServiceError::Model(_) => {
                Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "create automobile failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
            }
        },
    }
}

#[utoipa::path(
    get, path = "/autos/{vin}", tag = "autos",
    params(("vin" = String, Path, description = "Vehicle Identification Number")),
    responses(
        (status = 200, description = "OK"),
        (status = 204, description = "No automobile with that VIN")
    )
)]
pub async fn get_by_vin(State(state): State<ServerState>, Path(vin): Path<String>) -> Result<Response, JsonApiError> {
    match state.autos.get_auto(&vin).await {
        Ok(Some(m)) => Ok(Json(m).into_response()),
        Ok(None) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(e) => {
            error!(err = %e, "get automobile failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Get Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    patch, path = "/autos/{vin}", tag = "autos",
    params(("vin" = String, Path, description = "Vehicle Identification Number")),
    request_body = crate::openapi::UpdateAutoInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 204, description = "No automobile with that VIN"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(vin): Path<String>,
    Json(input): Json<UpdateAutoInput>,
) -> Result<Response, JsonApiError> {
    match state
        .autos
        .update_auto(&vin, input.price, input.preowned.as_deref(), input.grade.as_deref())
        .await
    {
        Ok(m) => {
            info!(id = %m.id, vin = %m.vin, "updated automobile");
            Ok(Json(m).into_response())
        }
        Err(e) => match e {
            ServiceError::NotFound(_) => Ok(StatusCode::NO_CONTENT.into_response()),
            ServiceError::Validation(_) | ServiceError::Model(_) => {
                Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())))
            }
            _ => {
                error!(err = %e, "update automobile failed");
                Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string())))
            }
        },
    }
}

#[utoipa::path(
    delete, path = "/autos/{vin}", tag = "autos",
    params(("vin" = String, Path, description = "Vehicle Identification Number")),
    responses(
        (status = 202, description = "Deletion accepted"),
        (status = 204, description = "No automobile with that VIN"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(vin): Path<String>) -> StatusCode {
    match state.autos.delete_auto(&vin).await {
        Ok(true) => { info!(%vin, "deleted automobile"); StatusCode::ACCEPTED }
        Ok(false) => StatusCode::NO_CONTENT,
        Err(e) => { error!(err = %e, "delete automobile failed"); StatusCode::INTERNAL_SERVER_ERROR }
    }
}

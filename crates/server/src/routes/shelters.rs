use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use service::errors::ServiceError;
use service::shelter_service::{self, ShelterRecord};
use service::validation::ShelterInput;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListSheltersQuery {
    pub city_name: String,
    pub district: String,
}

/// List shelters filtered by city/district. The body is the shelter array,
/// or JSON `null` when the query failed (distinct from `[]` for no matches).
pub async fn list_shelters(
    State(state): State<ServerState>,
    Query(query): Query<ListSheltersQuery>,
) -> Json<Option<Vec<ShelterRecord>>> {
    Json(shelter_service::list_shelters(&state.db, &query.city_name, &query.district).await)
}

/// Register a shelter. Validation failures return 400 with per-field
/// messages; a persistence failure returns JSON `null` so callers can
/// branch on truthiness, matching the listing contract.
pub async fn create_shelter(
    State(state): State<ServerState>,
    Json(input): Json<ShelterInput>,
) -> Result<Json<Option<ShelterRecord>>, JsonApiError> {
    match shelter_service::create_shelter(&state.db, input).await {
        Ok(record) => Ok(Json(Some(record))),
        Err(ServiceError::Validation(errors)) => Err(JsonApiError::validation(errors)),
        Err(e) => {
            tracing::error!(error = %e, "shelter creation failed");
            Ok(Json(None))
        }
    }
}

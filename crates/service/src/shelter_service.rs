//! The two registry operations: filtered listing and transactional creation.

use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SelectTwo, Set, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use models::shelter::ShelterType;
use models::{address, shelter};

use crate::errors::ServiceError;
use crate::validation::{self, ShelterInput};

/// Listing/creation projection: id, name, type and the nested address only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub shelter_type: ShelterType,
    pub address: Option<AddressRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub street: String,
    pub number: String,
    pub district: String,
    pub reference_point: Option<String>,
    pub state: String,
    pub city: String,
}

impl ShelterRecord {
    fn from_models(s: shelter::Model, a: Option<address::Model>) -> Self {
        Self {
            id: s.id,
            name: s.name,
            shelter_type: s.shelter_type,
            address: a.map(|a| AddressRecord {
                street: a.street,
                number: a.number,
                district: a.district,
                reference_point: a.reference_point,
                state: a.state,
                city: a.city,
            }),
        }
    }
}

// LIKE pattern for a literal substring: `\`, `%` and `_` in the term are
// escaped so they match themselves rather than acting as wildcards.
fn substring(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{escaped}%")
}

/// Filter policy:
/// - city and district present: both matched as case-insensitive substrings
/// - city only: city matched
/// - city absent: no filter at all; a district without a city is ignored
///   (kept as-is pending product clarification, see DESIGN.md)
fn city_district_filter(city_name: &str, district: &str) -> Condition {
    let mut cond = Condition::all();
    if !city_name.is_empty() && !district.is_empty() {
        cond = cond
            .add(Expr::col((address::Entity, address::Column::City)).ilike(substring(city_name)))
            .add(
                Expr::col((address::Entity, address::Column::District))
                    .ilike(substring(district)),
            );
    } else if !city_name.is_empty() {
        cond = cond
            .add(Expr::col((address::Entity, address::Column::City)).ilike(substring(city_name)));
    }
    cond
}

pub(crate) fn shelter_query(
    city_name: &str,
    district: &str,
) -> SelectTwo<shelter::Entity, address::Entity> {
    shelter::Entity::find()
        .find_also_related(address::Entity)
        .filter(city_district_filter(city_name, district))
        .order_by_desc(shelter::Column::CreatedAt)
}

/// List shelters matching the filter, most recently created first.
pub async fn query_shelters(
    db: &DatabaseConnection,
    city_name: &str,
    district: &str,
) -> Result<Vec<ShelterRecord>, ServiceError> {
    let rows = shelter_query(city_name, district)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(|(s, a)| ShelterRecord::from_models(s, a)).collect())
}

/// Boundary wrapper: `None` means the query failed, `Some(vec![])` means
/// zero matches. Failures are logged here and never propagated.
pub async fn list_shelters(
    db: &DatabaseConnection,
    city_name: &str,
    district: &str,
) -> Option<Vec<ShelterRecord>> {
    match query_shelters(db, city_name, district).await {
        Ok(list) => Some(list),
        Err(e) => {
            tracing::error!(error = %e, "shelter listing failed");
            None
        }
    }
}

/// Validate and persist a shelter with its address as one transaction.
/// The transaction rolls back on drop if any insert fails.
pub async fn create_shelter(
    db: &DatabaseConnection,
    input: ShelterInput,
) -> Result<ShelterRecord, ServiceError> {
    let validated = validation::validate_shelter(&input).map_err(ServiceError::Validation)?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let created = shelter::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(validated.name),
        shelter_type: Set(validated.shelter_type),
        created_at: Set(Utc::now().into()),
    }
    .insert(&txn)
    .await
    .map_err(|e| ServiceError::Db(e.to_string()))?;
    let created_address = address::ActiveModel {
        id: Set(Uuid::new_v4()),
        shelter_id: Set(created.id),
        street: Set(validated.address.street),
        number: Set(validated.address.number),
        district: Set(validated.address.district),
        city: Set(validated.address.city),
        reference_point: Set(validated.address.reference_point),
        state: Set(validated.address.state),
    }
    .insert(&txn)
    .await
    .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    Ok(ShelterRecord::from_models(created, Some(created_address)))
}

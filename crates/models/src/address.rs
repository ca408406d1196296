use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shelter;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub shelter_id: Uuid,
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub reference_point: Option<String>,
    pub state: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Shelter,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Shelter => Entity::belongs_to(shelter::Entity)
                .from(Column::ShelterId)
                .to(shelter::Column::Id)
                .into(),
        }
    }
}

impl Related<shelter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shelter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::db::connect;
use crate::shelter::ShelterType;
use crate::{address, shelter};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn insert_shelter(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
) -> Result<shelter::Model> {
    let s = shelter::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        shelter_type: Set(ShelterType::People),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await?;
    address::ActiveModel {
        id: Set(Uuid::new_v4()),
        shelter_id: Set(s.id),
        street: Set("Rua A".into()),
        number: Set("100".into()),
        district: Set("Centro".into()),
        city: Set(city.to_string()),
        reference_point: Set(None),
        state: Set("RS".into()),
    }
    .insert(db)
    .await?;
    Ok(s)
}

#[tokio::test]
async fn test_shelter_with_address_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let marker = format!("crud_city_{}", Uuid::new_v4());
    let created = insert_shelter(&db, "Ginásio poliesportivo", &marker).await?;

    let found = shelter::Entity::find_by_id(created.id)
        .find_also_related(address::Entity)
        .one(&db)
        .await?;
    let (found_shelter, found_address) = found.expect("created shelter exists");
    assert_eq!(found_shelter.name, "Ginásio poliesportivo");
    assert_eq!(found_shelter.shelter_type, ShelterType::People);
    let found_address = found_address.expect("address created with shelter");
    assert_eq!(found_address.shelter_id, created.id);
    assert_eq!(found_address.state, "RS");
    assert_eq!(found_address.city, marker);

    // FK cascade removes the address with its shelter
    shelter::Entity::delete_by_id(created.id).exec(&db).await?;
    let orphan = address::Entity::find_by_id(found_address.id).one(&db).await?;
    assert!(orphan.is_none());
    Ok(())
}

#[tokio::test]
async fn test_created_at_descending_order() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let marker = format!("order_city_{}", Uuid::new_v4());
    let first = insert_shelter(&db, "first", &marker).await?;
    let second = insert_shelter(&db, "second", &marker).await?;
    let third = insert_shelter(&db, "third", &marker).await?;

    let ids: Vec<Uuid> = shelter::Entity::find()
        .order_by_desc(shelter::Column::CreatedAt)
        .all(&db)
        .await?
        .into_iter()
        .map(|s| s.id)
        .filter(|id| [first.id, second.id, third.id].contains(id))
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    for id in [first.id, second.id, third.id] {
        shelter::Entity::delete_by_id(id).exec(&db).await?;
    }
    Ok(())
}

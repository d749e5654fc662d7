use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set, QueryFilter, ColumnTrait};
use chrono::Utc;
use models::automobile::{self, Entity as AutomobileEntity, NewAutomobile};
use crate::errors::ServiceError;

/// List all automobiles.
pub async fn list_autos(db: &DatabaseConnection) -> Result<Vec<automobile::Model>, ServiceError> {
    let rows = AutomobileEntity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Search automobiles by substring containment on color and make.
pub async fn search_autos(db: &DatabaseConnection, color: &str, make: &str) -> Result<Vec<automobile::Model>, ServiceError> {
    let rows = AutomobileEntity::find()
        .filter(automobile::Column::Color.contains(color))
        .filter(automobile::Column::Make.contains(make))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create an automobile after validation.
pub async fn create_auto(db: &DatabaseConnection, new: &NewAutomobile) -> Result<automobile::Model, ServiceError> {
    // validations are in models::automobile
    let created = automobile::create(db, new).await?;
    Ok(created)
}

/// Get an automobile by VIN (case-normalized lookup).
pub async fn get_auto_by_vin(db: &DatabaseConnection, vin: &str) -> Result<Option<automobile::Model>, ServiceError> {
    let vin = vin.trim().to_ascii_uppercase();
    let found = AutomobileEntity::find()
        .filter(automobile::Column::Vin.eq(vin))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Update price/preowned/grade on an automobile with validations.
pub async fn update_auto(
    db: &DatabaseConnection,
    vin: &str,
    price: Option<i64>,
    preowned: Option<&str>,
    grade: Option<&str>,
) -> Result<automobile::Model, ServiceError> {
    let vin = automobile::validate_vin(vin)?;
    let current = AutomobileEntity::find()
        .filter(automobile::Column::Vin.eq(vin))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else { return Err(ServiceError::not_found("automobile")); };
    let mut am: automobile::ActiveModel = existing.into();
    if let Some(p) = price { automobile::validate_price(p)?; am.price = Set(Some(p)); }
    if let Some(s) = preowned { let s = automobile::validate_preowned(s)?; am.preowned = Set(Some(s)); }
    if let Some(g) = grade { let g = automobile::validate_grade(g)?; am.grade = Set(Some(g)); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete an automobile by VIN; returns true if a row was removed.
pub async fn delete_auto(db: &DatabaseConnection, vin: &str) -> Result<bool, ServiceError> {
    let vin = vin.trim().to_ascii_uppercase();
    let res = AutomobileEntity::delete_many()
        .filter(automobile::Column::Vin.eq(vin))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn test_vin() -> String {
        format!("SVC{}", &Uuid::new_v4().simple().to_string()[..12].to_uppercase())
    }

    #[tokio::test]
    async fn autos_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let vin = test_vin();
        let color = format!("C{}", &Uuid::new_v4().simple().to_string()[..10].to_uppercase());
        let a = create_auto(&db, &NewAutomobile {
            make: "Toyota".into(),
            model: "Supra".into(),
            year: 1995,
            vin: vin.clone(),
            color: Some(color.clone()),
            price: None,
            preowned: None,
            grade: None,
        }).await?;
        assert_eq!(a.vin, vin);

        let found = get_auto_by_vin(&db, &vin).await?.unwrap();
        assert_eq!(found.make, "Toyota");
        assert_eq!(found.model, "Supra");

        // lookup is case-insensitive on the VIN
        let found_lower = get_auto_by_vin(&db, &vin.to_lowercase()).await?;
        assert!(found_lower.is_some());

        let updated = update_auto(&db, &vin, Some(1_234_500), Some("cpo"), Some("excellent")).await?;
        assert_eq!(updated.price, Some(1_234_500));
        assert_eq!(updated.preowned.as_deref(), Some("CPO"));
        assert_eq!(updated.grade.as_deref(), Some("EXCELLENT"));

        let list_all = list_autos(&db).await?;
        assert!(!list_all.is_empty());
        let by_color = search_autos(&db, &color, "Toy").await?;
        assert!(by_color.iter().any(|x| x.id == a.id));
        let no_match = search_autos(&db, &color, "Ford").await?;
        assert!(no_match.is_empty());

        let deleted = delete_auto(&db, &vin).await?;
        assert!(deleted);
        let after = get_auto_by_vin(&db, &vin).await?;
        assert!(after.is_none());
        let deleted_again = delete_auto(&db, &vin).await?;
        assert!(!deleted_again);

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_vin_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let res = update_auto(&db, &test_vin(), Some(100), None, None).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}

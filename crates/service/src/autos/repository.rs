use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::automobile::NewAutomobile;

use crate::errors::ServiceError;

#[async_trait]
pub trait AutosRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::automobile::Model>, ServiceError>;
    async fn search(&self, color: &str, make: &str) -> Result<Vec<models::automobile::Model>, ServiceError>;
    async fn create(&self, new: &NewAutomobile) -> Result<models::automobile::Model, ServiceError>;
    async fn find_by_vin(&self, vin: &str) -> Result<Option<models::automobile::Model>, ServiceError>;
    async fn update(&self, vin: &str, price: Option<i64>, preowned: Option<&str>, grade: Option<&str>) -> Result<models::automobile::Model, ServiceError>;
    async fn delete(&self, vin: &str) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmAutosRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AutosRepository for SeaOrmAutosRepository {
    async fn list(&self) -> Result<Vec<models::automobile::Model>, ServiceError> {
        crate::db::autos_service::list_autos(&self.db).await
    }

    async fn search(&self, color: &str, make: &str) -> Result<Vec<models::automobile::Model>, ServiceError> {
        crate::db::autos_service::search_autos(&self.db, color, make).await
    }

    async fn create(&self, new: &NewAutomobile) -> Result<models::automobile::Model, ServiceError> {
        crate::db::autos_service::create_auto(&self.db, new).await
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Option<models::automobile::Model>, ServiceError> {
        crate::db::autos_service::get_auto_by_vin(&self.db, vin).await
    }

    async fn update(&self, vin: &str, price: Option<i64>, preowned: Option<&str>, grade: Option<&str>) -> Result<models::automobile::Model, ServiceError> {
        crate::db::autos_service::update_auto(&self.db, vin, price, preowned, grade).await
    }

    async fn delete(&self, vin: &str) -> Result<bool, ServiceError> {
        crate::db::autos_service::delete_auto(&self.db, vin).await
    }
}

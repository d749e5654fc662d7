use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::automobile::{self, NewAutomobile};

use crate::autos::repository::AutosRepository;
use crate::errors::ServiceError;

/// Envelope for list responses; an empty list signals "no content".
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AutosList {
    pub automobiles: Vec<automobile::Model>,
}

impl AutosList {
    pub fn new(automobiles: Vec<automobile::Model>) -> Self { Self { automobiles } }

    pub fn is_empty(&self) -> bool { self.automobiles.is_empty() }

    pub fn len(&self) -> usize { self.automobiles.len() }
}

/// Application service encapsulating automobile inventory business rules.
/// Field validation lives in `models`; VIN uniqueness policy lives here.
pub struct AutosService<R: AutosRepository> {
    repo: Arc<R>,
}

impl<R: AutosRepository> AutosService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_autos(&self) -> Result<AutosList, ServiceError> {
        Ok(AutosList::new(self.repo.list().await?))
    }

    pub async fn search_autos(&self, color: &str, make: &str) -> Result<AutosList, ServiceError> {
        Ok(AutosList::new(self.repo.search(color, make).await?))
    }

    /// Create with policy: the VIN is the natural key, duplicates are rejected.
    #[instrument(skip(self, new), fields(vin = %new.vin))]
    pub async fn add_auto(&self, new: &NewAutomobile) -> Result<automobile::Model, ServiceError> {
        let vin = automobile::validate_vin(&new.vin)?;
        if self.repo.find_by_vin(&vin).await?.is_some() {
            return Err(ServiceError::Validation(format!("automobile with VIN {} already exists", vin)));
        }
        let created = self.repo.create(new).await?;
        info!(id = %created.id, vin = %created.vin, "created automobile");
        Ok(created)
    }

    pub async fn get_auto(&self, vin: &str) -> Result<Option<automobile::Model>, ServiceError> {
        self.repo.find_by_vin(vin).await
    }

    pub async fn update_auto(
        &self,
        vin: &str,
        price: Option<i64>,
        preowned: Option<&str>,
        grade: Option<&str>,
    ) -> Result<automobile::Model, ServiceError> {
        self.repo.update(vin, price, preowned, grade).await
    }

    pub async fn delete_auto(&self, vin: &str) -> Result<bool, ServiceError> {
        self.repo.delete(vin).await
    }
}

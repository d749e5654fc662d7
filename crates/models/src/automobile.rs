use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "automobile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub color: Option<String>,
    pub price: Option<i64>,
    pub preowned: Option<String>,
    pub grade: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert payload accepted by `create` and the POST /autos body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewAutomobile {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub preowned: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

pub const PREOWNED_VALUES: [&str; 3] = ["NEW", "CPO", "USED"];
pub const GRADE_VALUES: [&str; 5] = ["EXCELLENT", "VERY_GOOD", "GOOD", "FAIR", "POOR"];

// 1886: first production automobile
const MIN_YEAR: i32 = 1886;
const MAX_YEAR: i32 = 2100;

pub fn validate_vin(v: &str) -> Result<String, errors::ModelError> {
    let up = v.trim().to_ascii_uppercase();
    if up.is_empty() || up.len() > 17 || !up.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(errors::ModelError::Validation("invalid VIN".into()));
    }
    Ok(up)
}

pub fn validate_preowned(p: &str) -> Result<String, errors::ModelError> {
    let up = p.trim().to_ascii_uppercase();
    if !PREOWNED_VALUES.contains(&up.as_str()) {
        return Err(errors::ModelError::Validation("invalid preowned status".into()));
    }
    Ok(up)
}

pub fn validate_grade(g: &str) -> Result<String, errors::ModelError> {
    let up = g.trim().to_ascii_uppercase();
    if !GRADE_VALUES.contains(&up.as_str()) {
        return Err(errors::ModelError::Validation("invalid condition grade".into()));
    }
    Ok(up)
}

pub fn validate_year(y: i32) -> Result<(), errors::ModelError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&y) {
        return Err(errors::ModelError::Validation("year out of range".into()));
    }
    Ok(())
}

pub fn validate_price(p: i64) -> Result<(), errors::ModelError> {
    if p < 0 {
        return Err(errors::ModelError::Validation("price must be >= 0".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, new: &NewAutomobile) -> Result<Model, errors::ModelError> {
    if new.make.trim().is_empty() { return Err(errors::ModelError::Validation("make required".into())); }
    if new.model.trim().is_empty() { return Err(errors::ModelError::Validation("model required".into())); }
    validate_year(new.year)?;
    let vin = validate_vin(&new.vin)?;
    if let Some(p) = new.price { validate_price(p)?; }
    let preowned = new.preowned.as_deref().map(validate_preowned).transpose()?;
    let grade = new.grade.as_deref().map(validate_grade).transpose()?;

    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        make: Set(new.make.trim().to_string()),
        model: Set(new.model.trim().to_string()),
        year: Set(new.year),
        vin: Set(vin),
        color: Set(new.color.clone()),
        price: Set(new.price),
        preowned: Set(preowned),
        grade: Set(grade),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

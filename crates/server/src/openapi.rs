use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct NewAutomobileDoc {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub color: Option<String>,
    pub price: Option<i64>,
    pub preowned: Option<String>,
    pub grade: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateAutoInputDoc {
    pub price: Option<i64>,
    pub preowned: Option<String>,
    pub grade: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::autos::list,
        crate::routes::autos::create,
        crate::routes::autos::get_by_vin,
        crate::routes::autos::update,
        crate::routes::autos::delete,
    ),
    components(
        schemas(
            HealthResponse,
            NewAutomobileDoc,
            UpdateAutoInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "autos")
    )
)]
pub struct ApiDoc;

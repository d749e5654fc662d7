pub mod repository;
pub mod service;

pub use repository::{AutosRepository, SeaOrmAutosRepository};
pub use service::{AutosList, AutosService};

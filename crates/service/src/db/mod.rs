pub mod autos_service;

//! Services module
//!
//! Este módulo contiene la lógica de negocio del núcleo: el registro
//! autoritativo de trabajadores, la proyección de rutas, el motor de
//! filtrado y el coordinador de edición en línea.

pub mod edit_coordinator;
pub mod filter_service;
pub mod route_directory;
pub mod worker_registry;

pub use edit_coordinator::*;
pub use filter_service::*;
pub use route_directory::*;
pub use worker_registry::*;

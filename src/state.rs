//! Estado compartido de la sesión
//!
//! Este módulo define el estado que el controlador de asignación
//! orquesta: el registro autoritativo más los slots de estado de
//! interacción. La sesión de edición y el menú contextual abierto son
//! dos slots independientes; cualquiera puede estar activo sin el otro.

use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::route::Route;
use crate::models::worker::Worker;
use crate::services::edit_coordinator::EditCoordinator;
use crate::services::filter_service::FilterCriteria;
use crate::services::route_directory::RouteDirectory;
use crate::services::worker_registry::{RegistryConfig, WorkerRegistry};

pub struct SessionState {
    pub registry: WorkerRegistry,
    pub edit: EditCoordinator,
    pub filter: FilterCriteria,
    /// Visibilidad del campo de búsqueda; ocultarlo limpia la query
    pub search_visible: bool,
    /// Menú contextual abierto, independiente de la sesión de edición
    pub open_menu: Option<Uuid>,
}

impl SessionState {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            registry: WorkerRegistry::with_config(RegistryConfig::from(config)),
            edit: EditCoordinator::new(),
            filter: FilterCriteria::new(),
            search_visible: false,
            open_menu: None,
        }
    }

    /// Subconjunto del registro que pasa el criterio de filtrado activo
    pub fn visible_workers(&self) -> Vec<Worker> {
        self.filter.apply(self.registry.workers())
    }

    /// Directorio de rutas completo, recalculado sobre el registro actual
    pub fn routes(&self) -> Vec<Route> {
        RouteDirectory::list(&self.registry)
    }

    /// Vista agrupada del subconjunto visible
    pub fn visible_routes(&self) -> Vec<Route> {
        RouteDirectory::project(&self.visible_workers())
    }

    /// Nombres de ruta candidatos para los diálogos
    pub fn route_names(&self) -> Vec<String> {
        RouteDirectory::route_names(&self.registry)
    }
}

//! Directorio de rutas
//!
//! Proyección pura sobre el registro de trabajadores: una ruta por cada
//! nombre distinto, en orden de primera aparición, con sus miembros en
//! orden de inserción. Se recalcula en cada lectura; no existe un
//! segundo almacén de rutas que pueda quedar desincronizado.

use std::collections::HashMap;

use crate::models::route::Route;
use crate::models::worker::Worker;
use crate::services::worker_registry::WorkerRegistry;

pub struct RouteDirectory;

impl RouteDirectory {
    /// Listado agrupado del registro completo
    pub fn list(registry: &WorkerRegistry) -> Vec<Route> {
        Self::project(registry.workers())
    }

    /// Agrupación por ruta sobre un snapshot arbitrario de trabajadores
    pub fn project(workers: &[Worker]) -> Vec<Route> {
        let mut routes: Vec<Route> = Vec::new();
        let mut index_by_name: HashMap<String, usize> = HashMap::new();

        for worker in workers {
            match index_by_name.get(&worker.route_name) {
                Some(&i) => routes[i].members.push(worker.clone()),
                None => {
                    index_by_name.insert(worker.route_name.clone(), routes.len());
                    routes.push(Route {
                        name: worker.route_name.clone(),
                        members: vec![worker.clone()],
                    });
                }
            }
        }

        routes
    }

    /// Nombres de ruta en orden de primera aparición
    pub fn route_names(registry: &WorkerRegistry) -> Vec<String> {
        Self::list(registry).into_iter().map(|r| r.name).collect()
    }
}

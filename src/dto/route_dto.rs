use serde::{Deserialize, Serialize};

use crate::dto::worker_dto::WorkerResponse;
use crate::models::route::Route;

// Response de ruta para el listado agrupado
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub name: String,
    pub member_count: usize,
    pub is_draft: bool,
    pub members: Vec<WorkerResponse>,
}

impl From<&Route> for RouteResponse {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name.clone(),
            member_count: route.member_count(),
            is_draft: route.is_draft(),
            members: route.members.iter().map(WorkerResponse::from).collect(),
        }
    }
}

// Entrada candidata en el diálogo selector de rutas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteChoice {
    pub name: String,
    pub member_count: usize,
    /// La ruta actual del trabajador se muestra deshabilitada
    pub disabled: bool,
}

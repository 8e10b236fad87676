use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use validator::Validate;

use crate::models::worker::Worker;

// Request para crear un trabajador borrador
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDraftRequest {
    /// Ruta destino; None crea también una ruta borrador nueva
    pub route_name: Option<String>,
}

// Request para renombrar (y confirmar) un trabajador
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenameWorkerRequest {
    #[validate(
        custom = "crate::utils::validation::validate_not_empty",
        length(max = 120)
    )]
    pub new_name: String,
}

// Request para mover un trabajador a otra ruta
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReassignWorkerRequest {
    #[validate(custom = "crate::utils::validation::validate_route_name")]
    pub new_route_name: String,
}

// Response de trabajador
#[derive(Debug, Clone, Serialize)]
pub struct WorkerResponse {
    pub id: Uuid,
    pub name: String,
    pub employee_code: String,
    pub phone: String,
    pub route_name: String,
    pub is_draft: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Worker> for WorkerResponse {
    fn from(worker: &Worker) -> Self {
        Self {
            id: worker.id,
            name: worker.name.clone(),
            employee_code: worker.employee_code.clone(),
            phone: worker.phone.clone(),
            route_name: worker.route_name.clone(),
            is_draft: worker.is_draft,
            created_at: worker.created_at,
        }
    }
}

impl From<Worker> for WorkerResponse {
    fn from(worker: Worker) -> Self {
        Self::from(&worker)
    }
}

impl RenameWorkerRequest {
    pub fn new(new_name: impl Into<String>) -> Self {
        Self {
            new_name: new_name.into(),
        }
    }
}

impl ReassignWorkerRequest {
    pub fn new(new_route_name: impl Into<String>) -> Self {
        Self {
            new_route_name: new_route_name.into(),
        }
    }
}

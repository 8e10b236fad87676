//! Superficies externas de diálogo
//!
//! Este módulo define los contratos con los colaboradores externos del
//! controlador de asignación: confirmación, selector de ruta, filtro de
//! rutas y el sink de notificaciones. Cada diálogo es un viaje de ida y
//! vuelta con tres resoluciones posibles; cerrar el diálogo y presionar
//! cancelar son indistinguibles para el controlador.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::dto::route_dto::RouteChoice;
use crate::dto::worker_dto::WorkerResponse;
use crate::models::notification::Notification;

pub mod console;

/// Resolución de un diálogo: aceptado con payload, o cancelado
/// (descartar el diálogo equivale a cancelar)
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome<T> {
    Accepted(T),
    Cancelled,
}

impl<T> DialogOutcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DialogOutcome::Cancelled)
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            DialogOutcome::Accepted(value) => Some(value),
            DialogOutcome::Cancelled => None,
        }
    }
}

/// Pregunta sí/no previa a una acción destructiva
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub title: String,
    pub message: String,
}

/// Selección de ruta destino para mover un trabajador
#[derive(Debug, Clone, Serialize)]
pub struct RoutePickerRequest {
    pub worker: WorkerResponse,
    pub candidate_routes: Vec<RouteChoice>,
}

/// Multi-selección de rutas para el filtro activo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFilterRequest {
    pub candidate_routes: Vec<String>,
    pub current_selection: Vec<String>,
}

#[async_trait]
pub trait ConfirmationDialog: Send + Sync {
    async fn confirm(&self, request: ConfirmationRequest) -> DialogOutcome<()>;
}

#[async_trait]
pub trait RoutePickerDialog: Send + Sync {
    /// Devuelve el nombre de la ruta elegida
    async fn pick_route(&self, request: RoutePickerRequest) -> DialogOutcome<String>;
}

#[async_trait]
pub trait RouteFilterDialog: Send + Sync {
    /// Devuelve la nueva selección (posiblemente vacía: filtro inerte)
    async fn select_routes(&self, request: RouteFilterRequest) -> DialogOutcome<Vec<String>>;
}

/// Sink de notificaciones transitorias; fire-and-forget, sin respuesta
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

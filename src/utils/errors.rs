//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del núcleo de asignación
//! y su conversión a notificaciones para el operador.

use thiserror::Error;

use crate::models::notification::{Notification, Severity};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No-op move: {0}")]
    NoOpMove(String),
}

impl AppError {
    /// Severidad con la que este error se presenta al operador
    pub fn severity(&self) -> Severity {
        match self {
            AppError::Validation(_) => Severity::Warning,
            AppError::ValidationFailed(_) => Severity::Warning,
            AppError::NotFound(_) => Severity::Error,
            AppError::NoOpMove(_) => Severity::Info,
        }
    }

    /// Mensaje orientado al operador (las notificaciones no exponen detalles internos)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => {
                log::warn!("Validation error: {}", e);
                "Los datos ingresados no son válidos".to_string()
            }

            AppError::ValidationFailed(msg) => {
                log::warn!("Validation failed: {}", msg);
                msg.clone()
            }

            AppError::NotFound(msg) => {
                log::warn!("Resource not found: {}", msg);
                msg.clone()
            }

            AppError::NoOpMove(msg) => {
                log::info!("No-op move: {}", msg);
                msg.clone()
            }
        }
    }

    /// Convierte el error en la notificación que ve el operador
    pub fn to_notification(&self) -> Notification {
        Notification::new(self.user_message(), self.severity())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} con id '{}' no encontrado", resource, id))
}

/// Función helper para crear errores de movimiento sin efecto
pub fn no_op_move_error(route_name: &str) -> AppError {
    AppError::NoOpMove(format!(
        "El trabajador ya está asignado a la ruta '{}'",
        route_name
    ))
}

/// Función helper para crear errores de regla de negocio
pub fn validation_failed_error(message: &str) -> AppError {
    AppError::ValidationFailed(message.to_string())
}

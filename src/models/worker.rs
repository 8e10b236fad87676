//! Modelo de Trabajador
//!
//! Este módulo contiene el struct Worker del registro de personal de
//! recolección. Cada trabajador pertenece a exactamente una ruta.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trabajador de recolección asignado a una ruta
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    pub employee_code: String,
    pub phone: String,
    /// Referencia por nombre a una ruta del directorio (integridad referencial)
    pub route_name: String,
    /// true solo entre la creación y el primer rename exitoso
    pub is_draft: bool,
    pub created_at: DateTime<Utc>,
}

impl Worker {
    /// Crea un trabajador borrador con nombre placeholder y código generado
    pub fn draft(
        name: impl Into<String>,
        employee_code: impl Into<String>,
        route_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            employee_code: employee_code.into(),
            phone: String::new(),
            route_name: route_name.into(),
            is_draft: true,
            created_at: Utc::now(),
        }
    }

    /// Crea un trabajador ya confirmado (carga inicial de la sesión)
    pub fn confirmed(
        name: impl Into<String>,
        employee_code: impl Into<String>,
        phone: impl Into<String>,
        route_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            employee_code: employee_code.into(),
            phone: phone.into(),
            route_name: route_name.into(),
            is_draft: false,
            created_at: Utc::now(),
        }
    }
}

//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración de la sesión interactiva.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// Nombre placeholder para trabajadores recién creados
    pub draft_worker_placeholder: String,
    /// Nombre base para rutas recién creadas (se numera para unicidad)
    pub draft_route_placeholder: String,
    /// Límite de trabajadores por sesión
    pub max_roster_size: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            draft_worker_placeholder: env::var("DRAFT_WORKER_PLACEHOLDER")
                .unwrap_or_else(|_| "Nuevo recolector".to_string()),
            draft_route_placeholder: env::var("DRAFT_ROUTE_PLACEHOLDER")
                .unwrap_or_else(|_| "Nueva ruta".to_string()),
            max_roster_size: env::var("MAX_ROSTER_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

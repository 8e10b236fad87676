//! Registro de trabajadores
//!
//! Este módulo contiene la lista autoritativa de trabajadores de la
//! sesión. Todas las mutaciones pasan por aquí; las vistas derivadas
//! (directorio de rutas, subconjunto filtrado) se recalculan a partir
//! de este registro en cada lectura.

use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::worker_dto::{CreateDraftRequest, ReassignWorkerRequest, RenameWorkerRequest};
use crate::models::worker::Worker;
use crate::utils::errors::{
    no_op_move_error, not_found_error, validation_failed_error, AppResult,
};
use crate::utils::validation;

/// Registro autoritativo de trabajadores (orden de inserción)
pub struct WorkerRegistry {
    workers: Vec<Worker>,
    config: RegistryConfig,
    // Secuencias para placeholders y códigos generados
    route_seq: u32,
    code_seq: u32,
}

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub draft_worker_placeholder: String,
    pub draft_route_placeholder: String,
    pub max_roster_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            draft_worker_placeholder: "Nuevo recolector".to_string(),
            draft_route_placeholder: "Nueva ruta".to_string(),
            max_roster_size: 500,
        }
    }
}

impl From<&EnvironmentConfig> for RegistryConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            draft_worker_placeholder: config.draft_worker_placeholder.clone(),
            draft_route_placeholder: config.draft_route_placeholder.clone(),
            max_roster_size: config.max_roster_size,
        }
    }
}

impl WorkerRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            workers: Vec::new(),
            config,
            route_seq: 0,
            code_seq: 0,
        }
    }

    /// Crea un trabajador borrador con nombre placeholder y código generado.
    ///
    /// Con `route_name` presente el borrador se agrega a esa ruta (que debe
    /// existir); sin él se acuña además una ruta borrador nueva.
    pub fn create_draft(&mut self, request: CreateDraftRequest) -> AppResult<Worker> {
        request.validate()?;

        if self.workers.len() >= self.config.max_roster_size {
            return Err(validation_failed_error(
                "El registro alcanzó el límite de trabajadores de la sesión",
            ));
        }

        let route_name = match request.route_name {
            Some(route) => {
                if !self.route_exists(&route) {
                    return Err(not_found_error("Ruta", &route));
                }
                route
            }
            None => self.next_draft_route_name(),
        };

        let worker = Worker::draft(
            self.config.draft_worker_placeholder.clone(),
            self.next_employee_code(),
            route_name,
        );
        self.workers.push(worker.clone());

        log::info!(
            "✅ Borrador {} creado en ruta '{}'",
            worker.employee_code,
            worker.route_name
        );
        Ok(worker)
    }

    /// Renombra un trabajador; un rename exitoso siempre confirma el borrador
    pub fn rename(&mut self, id: Uuid, request: RenameWorkerRequest) -> AppResult<Worker> {
        request.validate()?;

        let worker = self
            .workers
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| not_found_error("Trabajador", &id.to_string()))?;

        let was_draft = worker.is_draft;
        worker.name = request.new_name.trim().to_string();
        worker.is_draft = false;

        if was_draft {
            log::info!("✅ Borrador {} confirmado como '{}'", worker.employee_code, worker.name);
        } else {
            log::info!("✅ Trabajador {} renombrado a '{}'", worker.employee_code, worker.name);
        }
        Ok(worker.clone())
    }

    /// Elimina un trabajador de forma permanente
    pub fn remove(&mut self, id: Uuid) -> AppResult<Worker> {
        let position = self
            .workers
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| not_found_error("Trabajador", &id.to_string()))?;

        let worker = self.workers.remove(position);
        log::info!(
            "🗑️ Trabajador {} eliminado de la ruta '{}'",
            worker.employee_code,
            worker.route_name
        );
        Ok(worker)
    }

    /// Mueve un trabajador a otra ruta; el movimiento debe ser un cambio real
    pub fn reassign(&mut self, id: Uuid, request: ReassignWorkerRequest) -> AppResult<Worker> {
        request.validate()?;

        let current_route = self
            .workers
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.route_name.clone())
            .ok_or_else(|| not_found_error("Trabajador", &id.to_string()))?;

        if current_route == request.new_route_name {
            return Err(no_op_move_error(&current_route));
        }

        if !self.route_exists(&request.new_route_name) {
            return Err(not_found_error("Ruta", &request.new_route_name));
        }

        // La búsqueda no puede fallar: el id se resolvió arriba
        let worker = self
            .workers
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| not_found_error("Trabajador", &id.to_string()))?;
        worker.route_name = request.new_route_name;

        log::info!(
            "✅ Trabajador {} movido de '{}' a '{}'",
            worker.employee_code,
            current_route,
            worker.route_name
        );
        Ok(worker.clone())
    }

    /// Elimina un trabajador solo si sigue en estado borrador.
    ///
    /// Es la vía por la que desaparece un borrador abandonado; sobre un
    /// trabajador confirmado (o un id desconocido) no tiene efecto.
    pub fn discard_draft(&mut self, id: Uuid) -> Option<Worker> {
        let position = self
            .workers
            .iter()
            .position(|w| w.id == id && w.is_draft)?;

        let worker = self.workers.remove(position);
        log::info!(
            "🗑️ Borrador {} descartado (ruta '{}')",
            worker.employee_code,
            worker.route_name
        );
        Some(worker)
    }

    /// Carga inicial de trabajadores confirmados (arranque de la sesión)
    pub fn seed(&mut self, entries: Vec<Worker>) -> usize {
        let mut inserted = 0;
        for worker in entries {
            if validation::validate_employee_code(&worker.employee_code).is_err() {
                log::warn!("⚠️ Código '{}' inválido, entrada omitida", worker.employee_code);
                continue;
            }
            if validation::validate_phone(&worker.phone).is_err() {
                log::warn!("⚠️ Teléfono inválido para {}, entrada omitida", worker.employee_code);
                continue;
            }
            if self
                .workers
                .iter()
                .any(|w| w.employee_code == worker.employee_code)
            {
                log::warn!("⚠️ Código {} duplicado, entrada omitida", worker.employee_code);
                continue;
            }
            self.workers.push(worker);
            inserted += 1;
        }
        log::info!("✅ {} trabajadores cargados en el registro", inserted);
        inserted
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn get(&self, id: Uuid) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// true si algún trabajador referencia la ruta (las rutas viven en sus miembros)
    pub fn route_exists(&self, route_name: &str) -> bool {
        self.workers.iter().any(|w| w.route_name == route_name)
    }

    // Métodos privados

    fn next_draft_route_name(&mut self) -> String {
        loop {
            self.route_seq += 1;
            let candidate = format!("{} {}", self.config.draft_route_placeholder, self.route_seq);
            if !self.route_exists(&candidate) {
                return candidate;
            }
        }
    }

    fn next_employee_code(&mut self) -> String {
        loop {
            self.code_seq += 1;
            let candidate = format!("W{:04}", self.code_seq);
            if !self.workers.iter().any(|w| w.employee_code == candidate) {
                return candidate;
            }
        }
    }
}

impl Default for WorkerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_route(route: &str) -> (WorkerRegistry, Uuid) {
        let mut registry = WorkerRegistry::new();
        registry.seed(vec![Worker::confirmed(
            "Marta Ríos",
            "W9001",
            "5551234567",
            route,
        )]);
        let id = registry.workers()[0].id;
        (registry, id)
    }

    #[test]
    fn test_create_draft_in_existing_route() {
        let (mut registry, _) = registry_with_route("Ruta Norte");

        let draft = registry
            .create_draft(CreateDraftRequest {
                route_name: Some("Ruta Norte".to_string()),
            })
            .unwrap();

        assert!(draft.is_draft);
        assert_eq!(draft.route_name, "Ruta Norte");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_create_draft_unknown_route_fails() {
        let (mut registry, _) = registry_with_route("Ruta Norte");

        let result = registry.create_draft(CreateDraftRequest {
            route_name: Some("Ruta Fantasma".to_string()),
        });

        assert!(result.is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_draft_mints_new_route() {
        let (mut registry, _) = registry_with_route("Ruta Norte");

        let draft = registry
            .create_draft(CreateDraftRequest { route_name: None })
            .unwrap();

        assert!(draft.route_name.starts_with("Nueva ruta"));
        assert!(registry.route_exists(&draft.route_name));
    }

    #[test]
    fn test_rename_confirms_draft() {
        let (mut registry, _) = registry_with_route("Ruta Norte");
        let draft = registry
            .create_draft(CreateDraftRequest {
                route_name: Some("Ruta Norte".to_string()),
            })
            .unwrap();

        let renamed = registry
            .rename(draft.id, RenameWorkerRequest::new("Ravi Kumar"))
            .unwrap();

        assert_eq!(renamed.name, "Ravi Kumar");
        assert!(!renamed.is_draft);
    }

    #[test]
    fn test_rename_whitespace_fails_unchanged() {
        let (mut registry, id) = registry_with_route("Ruta Norte");

        assert!(registry.rename(id, RenameWorkerRequest::new("")).is_err());
        assert!(registry.rename(id, RenameWorkerRequest::new("   ")).is_err());
        assert_eq!(registry.get(id).unwrap().name, "Marta Ríos");
    }

    #[test]
    fn test_reassign_same_route_is_no_op_move() {
        let (mut registry, id) = registry_with_route("Ruta Norte");

        let result = registry.reassign(id, ReassignWorkerRequest::new("Ruta Norte"));

        assert!(matches!(
            result,
            Err(crate::utils::errors::AppError::NoOpMove(_))
        ));
        assert_eq!(registry.get(id).unwrap().route_name, "Ruta Norte");
    }

    #[test]
    fn test_discard_draft_only_removes_drafts() {
        let (mut registry, confirmed_id) = registry_with_route("Ruta Norte");
        let draft = registry
            .create_draft(CreateDraftRequest {
                route_name: Some("Ruta Norte".to_string()),
            })
            .unwrap();

        assert!(registry.discard_draft(draft.id).is_some());
        assert!(registry.discard_draft(confirmed_id).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_generated_codes_skip_seeded_duplicates() {
        let mut registry = WorkerRegistry::new();
        registry.seed(vec![Worker::confirmed(
            "Marta Ríos",
            "W0001",
            "5551234567",
            "Ruta Norte",
        )]);

        let draft = registry
            .create_draft(CreateDraftRequest {
                route_name: Some("Ruta Norte".to_string()),
            })
            .unwrap();

        assert_eq!(draft.employee_code, "W0002");
    }

    #[test]
    fn test_roster_cap() {
        let mut registry = WorkerRegistry::with_config(RegistryConfig {
            max_roster_size: 1,
            ..RegistryConfig::default()
        });
        registry.seed(vec![Worker::confirmed(
            "Marta Ríos",
            "W9001",
            "5551234567",
            "Ruta Norte",
        )]);

        let result = registry.create_draft(CreateDraftRequest {
            route_name: Some("Ruta Norte".to_string()),
        });

        assert!(result.is_err());
    }
}

//! Coordinador de edición en línea
//!
//! Mantiene la única sesión de edición activa del sistema: qué trabajador
//! se está editando y el buffer de nombre pendiente. Guardar delega en el
//! rename del registro; cancelar sobre un borrador lo descarta para no
//! dejar entidades sin nombre huérfanas.

use uuid::Uuid;

use crate::dto::worker_dto::RenameWorkerRequest;
use crate::models::worker::Worker;
use crate::services::worker_registry::WorkerRegistry;
use crate::utils::errors::{validation_failed_error, AppResult};

/// Estado de edición: a lo sumo una sesión activa en todo el sistema
#[derive(Debug, Clone, PartialEq)]
pub enum EditState {
    Idle,
    Editing { target_id: Uuid, buffer: String },
}

pub struct EditCoordinator {
    state: EditState,
}

impl EditCoordinator {
    pub fn new() -> Self {
        Self {
            state: EditState::Idle,
        }
    }

    /// Inicia una sesión de edición sembrando el buffer con el nombre actual.
    ///
    /// Rechaza el inicio si ya hay otra sesión activa; resolver la anterior
    /// (guardar o cancelar) es política del controlador de asignación.
    pub fn start_edit(&mut self, worker: &Worker) -> AppResult<()> {
        if let EditState::Editing { target_id, .. } = self.state {
            return Err(validation_failed_error(&format!(
                "Ya hay una edición en curso para el trabajador '{}'",
                target_id
            )));
        }

        self.state = EditState::Editing {
            target_id: worker.id,
            buffer: worker.name.clone(),
        };
        log::info!("✏️ Edición iniciada para {}", worker.employee_code);
        Ok(())
    }

    /// Actualiza el buffer pendiente; sin efecto fuera de una edición
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let EditState::Editing { buffer, .. } = &mut self.state {
            *buffer = text.into();
        }
    }

    /// Intenta guardar el buffer como nombre definitivo.
    ///
    /// Si el rename falla por validación, la sesión permanece abierta para
    /// que el operador corrija el buffer y reintente.
    pub fn save(&mut self, registry: &mut WorkerRegistry) -> AppResult<Worker> {
        let (target_id, buffer) = match &self.state {
            EditState::Editing { target_id, buffer } => (*target_id, buffer.clone()),
            EditState::Idle => {
                return Err(validation_failed_error("No hay ninguna edición activa"));
            }
        };

        let worker = registry.rename(target_id, RenameWorkerRequest::new(buffer))?;
        self.state = EditState::Idle;
        Ok(worker)
    }

    /// Cancela la sesión activa.
    ///
    /// Un objetivo borrador se descarta del registro (y con él su ruta, si
    /// era la única que la referenciaba); uno confirmado queda intacto.
    /// Devuelve el borrador descartado, si lo hubo.
    pub fn cancel(&mut self, registry: &mut WorkerRegistry) -> Option<Worker> {
        let target_id = match &self.state {
            EditState::Editing { target_id, .. } => *target_id,
            EditState::Idle => return None,
        };

        self.state = EditState::Idle;
        registry.discard_draft(target_id)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn target(&self) -> Option<Uuid> {
        match &self.state {
            EditState::Editing { target_id, .. } => Some(*target_id),
            EditState::Idle => None,
        }
    }

    pub fn buffer(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { buffer, .. } => Some(buffer),
            EditState::Idle => None,
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }
}

impl Default for EditCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::worker_dto::CreateDraftRequest;

    fn registry_with_worker() -> (WorkerRegistry, Worker) {
        let mut registry = WorkerRegistry::new();
        registry.seed(vec![Worker::confirmed(
            "Marta Ríos",
            "W9001",
            "5551234567",
            "Ruta Norte",
        )]);
        let worker = registry.workers()[0].clone();
        (registry, worker)
    }

    #[test]
    fn test_start_edit_seeds_buffer() {
        let (_, worker) = registry_with_worker();
        let mut coordinator = EditCoordinator::new();

        coordinator.start_edit(&worker).unwrap();

        assert!(coordinator.is_editing());
        assert_eq!(coordinator.buffer(), Some("Marta Ríos"));
    }

    #[test]
    fn test_second_start_edit_is_rejected() {
        let (mut registry, worker) = registry_with_worker();
        let other = registry
            .create_draft(CreateDraftRequest {
                route_name: Some("Ruta Norte".to_string()),
            })
            .unwrap();
        let mut coordinator = EditCoordinator::new();

        coordinator.start_edit(&worker).unwrap();
        assert!(coordinator.start_edit(&other).is_err());
        assert_eq!(coordinator.target(), Some(worker.id));
    }

    #[test]
    fn test_save_transitions_to_idle() {
        let (mut registry, worker) = registry_with_worker();
        let mut coordinator = EditCoordinator::new();
        coordinator.start_edit(&worker).unwrap();
        coordinator.set_buffer("Marta Ríos de León");

        let saved = coordinator.save(&mut registry).unwrap();

        assert_eq!(saved.name, "Marta Ríos de León");
        assert!(!coordinator.is_editing());
    }

    #[test]
    fn test_failed_save_stays_editing() {
        let (mut registry, worker) = registry_with_worker();
        let mut coordinator = EditCoordinator::new();
        coordinator.start_edit(&worker).unwrap();
        coordinator.set_buffer("   ");

        assert!(coordinator.save(&mut registry).is_err());
        assert!(coordinator.is_editing());
        assert_eq!(registry.get(worker.id).unwrap().name, "Marta Ríos");
    }

    #[test]
    fn test_cancel_discards_draft_target() {
        let (mut registry, _) = registry_with_worker();
        let draft = registry
            .create_draft(CreateDraftRequest {
                route_name: Some("Ruta Norte".to_string()),
            })
            .unwrap();
        let mut coordinator = EditCoordinator::new();
        coordinator.start_edit(&draft).unwrap();

        let discarded = coordinator.cancel(&mut registry);

        assert_eq!(discarded.map(|w| w.id), Some(draft.id));
        assert!(registry.get(draft.id).is_none());
        assert!(!coordinator.is_editing());
    }

    #[test]
    fn test_cancel_leaves_confirmed_target_untouched() {
        let (mut registry, worker) = registry_with_worker();
        let mut coordinator = EditCoordinator::new();
        coordinator.start_edit(&worker).unwrap();
        coordinator.set_buffer("Nombre a medio escribir");

        let discarded = coordinator.cancel(&mut registry);

        assert!(discarded.is_none());
        assert_eq!(registry.get(worker.id).unwrap().name, "Marta Ríos");
    }
}

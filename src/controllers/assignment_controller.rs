//! Controlador de asignación
//!
//! Orquesta los intents del operador sobre el registro: abre los
//! diálogos externos, aplica sus resultados y emite notificaciones.
//! Toda falla de validación es local y no fatal; el estado previo queda
//! intacto y el operador ve a lo sumo una notificación transitoria.

use std::sync::Arc;

use uuid::Uuid;

use crate::dialogs::{
    ConfirmationDialog, ConfirmationRequest, DialogOutcome, NotificationSink, RouteFilterDialog,
    RouteFilterRequest, RoutePickerDialog, RoutePickerRequest,
};
use crate::dto::route_dto::RouteChoice;
use crate::dto::worker_dto::{CreateDraftRequest, ReassignWorkerRequest, WorkerResponse};
use crate::models::notification::Notification;
use crate::models::route::Route;
use crate::models::worker::Worker;
use crate::state::SessionState;
use crate::utils::errors::{not_found_error, AppError};

pub struct AssignmentController {
    state: SessionState,
    confirmation: Arc<dyn ConfirmationDialog>,
    route_picker: Arc<dyn RoutePickerDialog>,
    route_filter: Arc<dyn RouteFilterDialog>,
    notifications: Arc<dyn NotificationSink>,
}

impl AssignmentController {
    pub fn new(
        state: SessionState,
        confirmation: Arc<dyn ConfirmationDialog>,
        route_picker: Arc<dyn RoutePickerDialog>,
        route_filter: Arc<dyn RouteFilterDialog>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            state,
            confirmation,
            route_picker,
            route_filter,
            notifications,
        }
    }

    /// Eliminar un trabajador, previa confirmación del operador
    pub async fn delete_worker(&mut self, id: Uuid) {
        if self.is_edit_target(id) {
            self.notifications.notify(Notification::warning(
                "Termina la edición en curso antes de eliminar al trabajador",
            ));
            return;
        }

        let worker = match self.state.registry.get(id) {
            Some(worker) => worker.clone(),
            None => {
                self.notify_error(&not_found_error("Trabajador", &id.to_string()));
                return;
            }
        };

        let request = ConfirmationRequest {
            title: "Eliminar trabajador".to_string(),
            message: format!(
                "¿Eliminar a {} de la ruta '{}'? Esta acción es permanente.",
                worker.name, worker.route_name
            ),
        };

        if self.confirmation.confirm(request).await.is_cancelled() {
            log::info!("Eliminación de {} cancelada por el operador", worker.employee_code);
            return;
        }

        match self.state.registry.remove(id) {
            Ok(removed) => {
                if self.state.open_menu == Some(id) {
                    self.state.open_menu = None;
                }
                self.notifications.notify(Notification::success(format!(
                    "Trabajador '{}' eliminado",
                    removed.name
                )));
            }
            Err(e) => self.notify_error(&e),
        }
    }

    /// Mover un trabajador a otra ruta vía el selector de rutas.
    ///
    /// Elegir la ruta actual (entrada deshabilitada) o cerrar el diálogo
    /// no muta nada y no notifica: ambas son la vía de cancelación.
    pub async fn move_worker(&mut self, id: Uuid) {
        if self.is_edit_target(id) {
            self.notifications.notify(Notification::warning(
                "Termina la edición en curso antes de mover al trabajador",
            ));
            return;
        }

        let worker = match self.state.registry.get(id) {
            Some(worker) => worker.clone(),
            None => {
                self.notify_error(&not_found_error("Trabajador", &id.to_string()));
                return;
            }
        };

        let candidate_routes = self
            .state
            .routes()
            .iter()
            .map(|route| RouteChoice {
                name: route.name.clone(),
                member_count: route.member_count(),
                disabled: route.name == worker.route_name,
            })
            .collect();

        let request = RoutePickerRequest {
            worker: WorkerResponse::from(&worker),
            candidate_routes,
        };

        let destination = match self.route_picker.pick_route(request).await {
            DialogOutcome::Accepted(destination) => destination,
            DialogOutcome::Cancelled => return,
        };

        match self
            .state
            .registry
            .reassign(id, ReassignWorkerRequest::new(destination))
        {
            Ok(moved) => {
                self.notifications.notify(Notification::success(format!(
                    "'{}' movido a la ruta '{}'",
                    moved.name, moved.route_name
                )));
            }
            // El selector deshabilita la ruta actual; un pick igual llega
            // aquí como NoOpMove y se trata como cancelación silenciosa
            Err(AppError::NoOpMove(msg)) => {
                log::info!("Movimiento sin efecto ignorado: {}", msg);
            }
            Err(e) => self.notify_error(&e),
        }
    }

    /// Reemplazar el filtro de rutas activo vía el diálogo multi-selección
    pub async fn open_route_filter(&mut self) {
        let request = RouteFilterRequest {
            candidate_routes: self.state.route_names(),
            current_selection: self.state.filter.route_filter.clone(),
        };

        let selection = match self.route_filter.select_routes(request).await {
            DialogOutcome::Accepted(selection) => selection,
            DialogOutcome::Cancelled => return,
        };

        let message = if selection.is_empty() {
            "Filtro de rutas limpiado".to_string()
        } else {
            format!("Filtro aplicado: {} ruta(s)", selection.len())
        };
        self.state.filter.set_routes(selection);
        self.notifications.notify(Notification::info(message));
    }

    /// Limpiar el filtro de rutas sin pasar por el diálogo
    pub fn clear_route_filter(&mut self) {
        self.state.filter.clear_routes();
        self.notifications
            .notify(Notification::info("Filtro de rutas limpiado"));
    }

    /// Crear un borrador y abrir de inmediato su edición.
    ///
    /// Sin ruta destino se acuña además una ruta borrador nueva. Una
    /// sesión de edición previa se resuelve primero por la vía de
    /// cancelación (un borrador anterior sin nombre se descarta).
    pub async fn add_draft(&mut self, initial_route: Option<String>) {
        self.resolve_active_edit();

        let draft = match self.state.registry.create_draft(CreateDraftRequest {
            route_name: initial_route,
        }) {
            Ok(draft) => draft,
            Err(e) => {
                self.notify_error(&e);
                return;
            }
        };

        if let Err(e) = self.state.edit.start_edit(&draft) {
            self.notify_error(&e);
        }
    }

    /// Iniciar la edición en línea de un trabajador existente
    pub fn start_edit(&mut self, id: Uuid) {
        if self.is_edit_target(id) {
            return;
        }
        self.resolve_active_edit();

        let worker = match self.state.registry.get(id) {
            Some(worker) => worker.clone(),
            None => {
                self.notify_error(&not_found_error("Trabajador", &id.to_string()));
                return;
            }
        };

        if let Err(e) = self.state.edit.start_edit(&worker) {
            self.notify_error(&e);
        }
    }

    /// Actualizar el buffer de la edición activa
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        self.state.edit.set_buffer(text);
    }

    /// Guardar la edición activa; un nombre inválido deja la sesión abierta
    pub fn save_edit(&mut self) {
        match self.state.edit.save(&mut self.state.registry) {
            Ok(worker) => {
                self.notifications.notify(Notification::success(format!(
                    "Trabajador '{}' guardado",
                    worker.name
                )));
            }
            Err(e) => self.notify_error(&e),
        }
    }

    /// Cancelar la edición activa; un borrador objetivo se descarta
    pub fn cancel_edit(&mut self) {
        if let Some(discarded) = self.state.edit.cancel(&mut self.state.registry) {
            log::info!("Borrador {} descartado al cancelar", discarded.employee_code);
        }
    }

    /// Alternar la visibilidad del campo de búsqueda; ocultarlo limpia la query
    pub fn toggle_search(&mut self) {
        self.state.search_visible = !self.state.search_visible;
        if !self.state.search_visible {
            self.state.filter.clear_query();
        }
    }

    /// Fijar la query de búsqueda (solo con el campo visible)
    pub fn set_query(&mut self, query: impl Into<String>) {
        if self.state.search_visible {
            self.state.filter.set_query(query);
        }
    }

    /// Alternar el menú contextual de un trabajador (slot independiente
    /// de la sesión de edición)
    pub fn toggle_menu(&mut self, id: Uuid) {
        self.state.open_menu = if self.state.open_menu == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn close_menu(&mut self) {
        self.state.open_menu = None;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn visible_workers(&self) -> Vec<Worker> {
        self.state.visible_workers()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.state.routes()
    }

    pub fn visible_routes(&self) -> Vec<Route> {
        self.state.visible_routes()
    }

    // Métodos privados

    fn is_edit_target(&self, id: Uuid) -> bool {
        self.state.edit.target() == Some(id)
    }

    /// Resuelve una sesión de edición previa por la vía de cancelación
    fn resolve_active_edit(&mut self) {
        if !self.state.edit.is_editing() {
            return;
        }
        if let Some(discarded) = self.state.edit.cancel(&mut self.state.registry) {
            log::info!(
                "Borrador {} descartado al iniciar otra edición",
                discarded.employee_code
            );
        }
    }

    fn notify_error(&self, error: &AppError) {
        self.notifications.notify(error.to_notification());
    }
}

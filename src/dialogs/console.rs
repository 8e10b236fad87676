//! Implementación de consola de las superficies de diálogo
//!
//! Diálogos modales sobre stdin/stdout para la shell interactiva. Una
//! línea vacía o una entrada inválida se tratan como cancelación, igual
//! que cerrar el diálogo en una superficie gráfica.

use async_trait::async_trait;
use std::io::{self, BufRead, Write};

use crate::dialogs::{
    ConfirmationDialog, ConfirmationRequest, DialogOutcome, NotificationSink, RouteFilterDialog,
    RouteFilterRequest, RoutePickerDialog, RoutePickerRequest,
};
use crate::models::notification::{Notification, Severity};

/// Superficies de diálogo de la shell de consola
pub struct ConsoleDialogs;

impl ConsoleDialogs {
    pub fn new() -> Self {
        Self
    }

    fn prompt(text: &str) -> Option<String> {
        print!("{}", text);
        if io::stdout().flush().is_err() {
            return None;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(_) => None,
        }
    }
}

impl Default for ConsoleDialogs {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfirmationDialog for ConsoleDialogs {
    async fn confirm(&self, request: ConfirmationRequest) -> DialogOutcome<()> {
        println!();
        println!("── {} ──", request.title);
        println!("{}", request.message);

        match Self::prompt("¿Confirmar? (s/n): ").as_deref() {
            Some("s") | Some("si") | Some("sí") => DialogOutcome::Accepted(()),
            _ => DialogOutcome::Cancelled,
        }
    }
}

#[async_trait]
impl RoutePickerDialog for ConsoleDialogs {
    async fn pick_route(&self, request: RoutePickerRequest) -> DialogOutcome<String> {
        println!();
        println!("── Mover a {} ──", request.worker.name);
        for (i, choice) in request.candidate_routes.iter().enumerate() {
            let marker = if choice.disabled { " (ruta actual)" } else { "" };
            println!(
                "  {}. {} [{} miembros]{}",
                i + 1,
                choice.name,
                choice.member_count,
                marker
            );
        }

        let input = match Self::prompt("Ruta destino (número, vacío cancela): ") {
            Some(line) if !line.is_empty() => line,
            _ => return DialogOutcome::Cancelled,
        };

        let index = match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= request.candidate_routes.len() => n - 1,
            _ => return DialogOutcome::Cancelled,
        };

        let choice = &request.candidate_routes[index];
        if choice.disabled {
            // La ruta actual no puede confirmarse
            return DialogOutcome::Cancelled;
        }
        DialogOutcome::Accepted(choice.name.clone())
    }
}

#[async_trait]
impl RouteFilterDialog for ConsoleDialogs {
    async fn select_routes(&self, request: RouteFilterRequest) -> DialogOutcome<Vec<String>> {
        println!();
        println!("── Filtrar por rutas ──");
        for (i, name) in request.candidate_routes.iter().enumerate() {
            let marker = if request.current_selection.contains(name) {
                "[x]"
            } else {
                "[ ]"
            };
            println!("  {}. {} {}", i + 1, marker, name);
        }

        let input = match Self::prompt(
            "Selección (números separados por coma, '0' limpia, vacío cancela): ",
        ) {
            Some(line) if !line.is_empty() => line,
            _ => return DialogOutcome::Cancelled,
        };

        if input == "0" {
            return DialogOutcome::Accepted(Vec::new());
        }

        let mut selection = Vec::new();
        for part in input.split(',') {
            match part.trim().parse::<usize>() {
                Ok(n) if n >= 1 && n <= request.candidate_routes.len() => {
                    let name = request.candidate_routes[n - 1].clone();
                    if !selection.contains(&name) {
                        selection.push(name);
                    }
                }
                _ => return DialogOutcome::Cancelled,
            }
        }
        DialogOutcome::Accepted(selection)
    }
}

impl NotificationSink for ConsoleDialogs {
    fn notify(&self, notification: Notification) {
        let prefix = match notification.severity {
            Severity::Info => "ℹ️",
            Severity::Success => "✅",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        };
        println!("{} {}", prefix, notification.message);
    }
}

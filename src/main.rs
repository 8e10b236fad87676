use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use dotenvy::dotenv;

use collection_routing::config::environment::EnvironmentConfig;
use collection_routing::controllers::AssignmentController;
use collection_routing::dialogs::console::ConsoleDialogs;
use collection_routing::dto::route_dto::RouteResponse;
use collection_routing::models::worker::Worker;
use collection_routing::state::SessionState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("🚛 Collection Routing - Personal de rutas de recolección");
    println!("========================================================");

    let config = EnvironmentConfig::default();
    info!("Entorno: {}", config.environment);

    let mut state = SessionState::new(&config);

    // Plantilla de demostración; la sesión es efímera por diseño
    state.registry.seed(vec![
        Worker::confirmed("Ravi Kumar", "W0101", "5550010001", "Ruta Centro"),
        Worker::confirmed("Marta Ríos", "W0102", "5550010002", "Ruta Centro"),
        Worker::confirmed("Jorge Paz", "W0103", "5550010003", "Ruta Norte"),
        Worker::confirmed("Lucía Vega", "W0104", "5550010004", "Ruta Norte"),
        Worker::confirmed("Omar Silva", "W0105", "5550010005", "Ruta Sur"),
    ]);

    let dialogs = Arc::new(ConsoleDialogs::new());
    let mut controller = AssignmentController::new(
        state,
        dialogs.clone(),
        dialogs.clone(),
        dialogs.clone(),
        dialogs,
    );

    render(&controller);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, argument) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "salir" => break,
            "ayuda" => print_help(),
            "listar" => {}
            "agregar" => {
                let route = if argument.is_empty() {
                    None
                } else {
                    Some(argument.to_string())
                };
                controller.add_draft(route).await;
            }
            "editar" => match resolve(&controller, argument) {
                Some(id) => controller.start_edit(id),
                None => println!("Código de empleado desconocido: '{}'", argument),
            },
            "buffer" => controller.set_edit_buffer(argument),
            "guardar" => controller.save_edit(),
            "cancelar" => controller.cancel_edit(),
            "mover" => match resolve(&controller, argument) {
                Some(id) => controller.move_worker(id).await,
                None => println!("Código de empleado desconocido: '{}'", argument),
            },
            "eliminar" => match resolve(&controller, argument) {
                Some(id) => controller.delete_worker(id).await,
                None => println!("Código de empleado desconocido: '{}'", argument),
            },
            "filtrar" => controller.open_route_filter().await,
            "limpiar" => controller.clear_route_filter(),
            "buscar" => controller.toggle_search(),
            "query" => controller.set_query(argument),
            _ => println!("Comando desconocido: '{}' (escribe 'ayuda')", command),
        }

        render(&controller);
    }

    println!("👋 Sesión finalizada");
    Ok(())
}

/// Imprime la vista agrupada por ruta del subconjunto visible
fn render(controller: &AssignmentController) {
    let state = controller.state();

    println!();
    if !state.filter.is_unrestricted() {
        println!(
            "(filtro activo: query '{}', {} ruta(s))",
            state.filter.query,
            state.filter.route_filter.len()
        );
    }

    let routes: Vec<RouteResponse> = controller
        .visible_routes()
        .iter()
        .map(RouteResponse::from)
        .collect();
    if routes.is_empty() {
        println!("(sin trabajadores visibles)");
    }
    for route in routes {
        println!("📍 {} [{} miembros]", route.name, route.member_count);
        for worker in &route.members {
            let marker = if worker.is_draft { " (borrador)" } else { "" };
            let editing = if state.edit.target() == Some(worker.id) {
                format!("  ✏️ [{}]", state.edit.buffer().unwrap_or_default())
            } else {
                String::new()
            };
            println!(
                "   {} {} - {}{}{}",
                worker.employee_code, worker.name, worker.phone, marker, editing
            );
        }
    }
    println!();
}

/// Resuelve un código de empleado visible a su id
fn resolve(controller: &AssignmentController, code: &str) -> Option<uuid::Uuid> {
    controller
        .state()
        .registry
        .workers()
        .iter()
        .find(|w| w.employee_code.eq_ignore_ascii_case(code))
        .map(|w| w.id)
}

fn print_help() {
    println!("Comandos:");
    println!("  agregar [ruta]   crear borrador (sin ruta: también crea una ruta nueva)");
    println!("  editar <código>  editar nombre en línea");
    println!("  buffer <texto>   escribir en el buffer de edición");
    println!("  guardar          confirmar la edición activa");
    println!("  cancelar         cancelar la edición (descarta borradores)");
    println!("  mover <código>   mover a otra ruta");
    println!("  eliminar <código> eliminar (pide confirmación)");
    println!("  filtrar          elegir rutas para el filtro");
    println!("  limpiar          limpiar el filtro de rutas");
    println!("  buscar           mostrar/ocultar búsqueda (ocultar limpia la query)");
    println!("  query <texto>    fijar la query de búsqueda");
    println!("  listar           volver a mostrar la vista");
    println!("  salir            terminar la sesión");
}

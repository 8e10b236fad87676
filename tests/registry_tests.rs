//! Tests de propiedades del registro, la proyección de rutas y el filtro

use collection_routing::dto::worker_dto::{
    CreateDraftRequest, ReassignWorkerRequest, RenameWorkerRequest,
};
use collection_routing::models::worker::Worker;
use collection_routing::services::filter_service::FilterCriteria;
use collection_routing::services::route_directory::RouteDirectory;
use collection_routing::services::worker_registry::WorkerRegistry;

fn seeded_registry() -> WorkerRegistry {
    let mut registry = WorkerRegistry::new();
    registry.seed(vec![
        Worker::confirmed("Ravi Kumar", "W0001", "5550010001", "Ruta A"),
        Worker::confirmed("Marta Ríos", "W0002", "5550010002", "Ruta A"),
        Worker::confirmed("Jorge Paz", "W0003", "5550010003", "Ruta B"),
    ]);
    registry
}

fn id_of(registry: &WorkerRegistry, code: &str) -> uuid::Uuid {
    registry
        .workers()
        .iter()
        .find(|w| w.employee_code == code)
        .map(|w| w.id)
        .expect("código sembrado")
}

/// Integridad referencial: toda route_name resuelve a una ruta del directorio
fn assert_referential_integrity(registry: &WorkerRegistry) {
    let route_names: Vec<String> = RouteDirectory::route_names(registry);
    for worker in registry.workers() {
        assert!(
            route_names.contains(&worker.route_name),
            "route_name '{}' sin ruta en el directorio",
            worker.route_name
        );
    }
}

#[test]
fn referential_integrity_holds_after_every_operation() {
    let mut registry = seeded_registry();
    assert_referential_integrity(&registry);

    let draft = registry
        .create_draft(CreateDraftRequest {
            route_name: Some("Ruta A".to_string()),
        })
        .unwrap();
    assert_referential_integrity(&registry);

    registry
        .rename(draft.id, RenameWorkerRequest::new("Luis Cano"))
        .unwrap();
    assert_referential_integrity(&registry);

    registry
        .reassign(draft.id, ReassignWorkerRequest::new("Ruta B"))
        .unwrap();
    assert_referential_integrity(&registry);

    registry.remove(draft.id).unwrap();
    assert_referential_integrity(&registry);

    let minted = registry
        .create_draft(CreateDraftRequest { route_name: None })
        .unwrap();
    assert_referential_integrity(&registry);

    registry.discard_draft(minted.id);
    assert_referential_integrity(&registry);
}

#[test]
fn reassign_to_current_route_always_fails_and_never_mutates() {
    let mut registry = seeded_registry();
    let id = id_of(&registry, "W0001");
    let before: Vec<Worker> = registry.workers().to_vec();

    let result = registry.reassign(id, ReassignWorkerRequest::new("Ruta A"));

    assert!(result.is_err());
    assert_eq!(registry.workers(), &before[..]);
}

#[test]
fn discard_draft_removes_iff_draft() {
    let mut registry = seeded_registry();
    let confirmed_id = id_of(&registry, "W0001");
    let draft = registry
        .create_draft(CreateDraftRequest {
            route_name: Some("Ruta B".to_string()),
        })
        .unwrap();

    // Sobre un borrador: lo elimina
    assert!(registry.discard_draft(draft.id).is_some());
    assert!(registry.get(draft.id).is_none());

    // Sobre un confirmado: no-op que deja al trabajador intacto
    let before = registry.get(confirmed_id).unwrap().clone();
    assert!(registry.discard_draft(confirmed_id).is_none());
    assert_eq!(registry.get(confirmed_id).unwrap(), &before);
}

#[test]
fn rename_empty_or_whitespace_fails_with_registry_unchanged() {
    let mut registry = seeded_registry();
    let id = id_of(&registry, "W0002");
    let before: Vec<Worker> = registry.workers().to_vec();

    assert!(registry.rename(id, RenameWorkerRequest::new("")).is_err());
    assert!(registry.rename(id, RenameWorkerRequest::new("   ")).is_err());
    assert_eq!(registry.workers(), &before[..]);
}

#[test]
fn empty_route_filter_equals_unrestricted_search() {
    let registry = seeded_registry();
    let unrestricted = FilterCriteria::new();
    let mut with_empty_routes = FilterCriteria::new();
    with_empty_routes.set_routes(Vec::new());

    assert_eq!(
        unrestricted.apply(registry.workers()),
        with_empty_routes.apply(registry.workers())
    );
}

#[test]
fn route_filter_never_returns_workers_outside_the_set() {
    let registry = seeded_registry();
    let mut criteria = FilterCriteria::new();
    criteria.set_routes(vec!["Ruta B".to_string()]);

    let visible = criteria.apply(registry.workers());

    assert!(!visible.is_empty());
    assert!(visible.iter().all(|w| w.route_name == "Ruta B"));
}

#[test]
fn scenario_filter_then_move_updates_both_views() {
    let mut registry = seeded_registry();
    let w1 = id_of(&registry, "W0001");

    // apply(workers, "", {"Ruta B"}) devuelve [W3]
    let mut criteria = FilterCriteria::new();
    criteria.set_routes(vec!["Ruta B".to_string()]);
    let visible = criteria.apply(registry.workers());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].employee_code, "W0003");

    // Tras mover W1 a Ruta B: Ruta A queda con W2, Ruta B con W3 y W1 en
    // ese orden de inserción
    registry
        .reassign(w1, ReassignWorkerRequest::new("Ruta B"))
        .unwrap();
    let routes = RouteDirectory::list(&registry);

    assert_eq!(routes[0].name, "Ruta A");
    assert_eq!(routes[0].member_count(), 1);
    assert_eq!(routes[0].members[0].employee_code, "W0002");

    assert_eq!(routes[1].name, "Ruta B");
    assert_eq!(routes[1].member_count(), 2);
    assert_eq!(routes[1].members[0].employee_code, "W0003");
    assert_eq!(routes[1].members[1].employee_code, "W0001");
}

#[test]
fn scenario_draft_then_discard_restores_member_count() {
    let mut registry = seeded_registry();
    let before = RouteDirectory::list(&registry)[0].member_count();

    let draft = registry
        .create_draft(CreateDraftRequest {
            route_name: Some("Ruta A".to_string()),
        })
        .unwrap();
    assert!(draft.is_draft);
    assert_eq!(RouteDirectory::list(&registry)[0].member_count(), before + 1);

    registry.discard_draft(draft.id);
    assert_eq!(RouteDirectory::list(&registry)[0].member_count(), before);
}

#[test]
fn scenario_rename_confirms_draft_and_discard_becomes_noop() {
    let mut registry = seeded_registry();
    let draft = registry
        .create_draft(CreateDraftRequest {
            route_name: Some("Ruta A".to_string()),
        })
        .unwrap();

    let renamed = registry
        .rename(draft.id, RenameWorkerRequest::new("Ravi Kumar"))
        .unwrap();
    assert!(!renamed.is_draft);

    // discard_draft sobre un confirmado ya no tiene efecto
    assert!(registry.discard_draft(draft.id).is_none());
    assert!(registry.get(draft.id).is_some());
}

#[test]
fn minted_draft_route_disappears_with_its_draft() {
    let mut registry = seeded_registry();
    let minted = registry
        .create_draft(CreateDraftRequest { route_name: None })
        .unwrap();
    assert!(registry.route_exists(&minted.route_name));

    registry.discard_draft(minted.id);

    assert!(!registry.route_exists(&minted.route_name));
    assert_referential_integrity(&registry);
}

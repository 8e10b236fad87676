//! Motor de filtrado y búsqueda
//!
//! Aplica dos predicados sobre el registro: búsqueda de texto libre
//! (nombre o código de empleado, sin distinguir mayúsculas) y pertenencia
//! a un conjunto de rutas. Ambos arrancan inertes: query vacía y filtro
//! de rutas vacío significan "sin restricción".

use serde::{Deserialize, Serialize};

use crate::models::worker::Worker;

/// Criterio de filtrado activo de la sesión
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub route_filter: Vec<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subconjunto visible del snapshot según el criterio actual
    pub fn apply(&self, workers: &[Worker]) -> Vec<Worker> {
        workers
            .iter()
            .filter(|w| self.matches(w))
            .cloned()
            .collect()
    }

    pub fn matches(&self, worker: &Worker) -> bool {
        self.matches_query(worker) && self.matches_route(worker)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.query.trim().is_empty() && self.route_filter.is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn set_routes(&mut self, routes: Vec<String>) {
        self.route_filter = routes;
    }

    pub fn clear_routes(&mut self) {
        self.route_filter.clear();
    }

    // Métodos privados

    fn matches_query(&self, worker: &Worker) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        worker.name.to_lowercase().contains(&query)
            || worker.employee_code.to_lowercase().contains(&query)
    }

    fn matches_route(&self, worker: &Worker) -> bool {
        self.route_filter.is_empty() || self.route_filter.contains(&worker.route_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(name: &str, code: &str, route: &str) -> Worker {
        Worker::confirmed(name, code, "5551234567", route)
    }

    fn roster() -> Vec<Worker> {
        vec![
            worker("Ravi Kumar", "W0001", "Ruta A"),
            worker("Marta Ríos", "W0002", "Ruta A"),
            worker("Jorge Paz", "W0003", "Ruta B"),
        ]
    }

    #[test]
    fn test_empty_criteria_is_unrestricted() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_unrestricted());
        assert_eq!(criteria.apply(&roster()).len(), 3);
    }

    #[test]
    fn test_query_matches_name_case_insensitive() {
        let mut criteria = FilterCriteria::new();
        criteria.set_query("ravi");

        let visible = criteria.apply(&roster());

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Ravi Kumar");
    }

    #[test]
    fn test_query_matches_employee_code() {
        let mut criteria = FilterCriteria::new();
        criteria.set_query("w0003");

        let visible = criteria.apply(&roster());

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].employee_code, "W0003");
    }

    #[test]
    fn test_route_filter_restricts_membership() {
        let mut criteria = FilterCriteria::new();
        criteria.set_routes(vec!["Ruta B".to_string()]);

        let visible = criteria.apply(&roster());

        assert_eq!(visible.len(), 1);
        assert!(visible.iter().all(|w| w.route_name == "Ruta B"));
    }

    #[test]
    fn test_both_predicates_combine() {
        let mut criteria = FilterCriteria::new();
        criteria.set_query("Marta");
        criteria.set_routes(vec!["Ruta B".to_string()]);

        // Marta está en Ruta A: pasa la query pero no el filtro de rutas
        assert!(criteria.apply(&roster()).is_empty());
    }

    #[test]
    fn test_clear_routes_resets_to_unrestricted() {
        let mut criteria = FilterCriteria::new();
        criteria.set_routes(vec!["Ruta B".to_string()]);
        criteria.clear_routes();

        assert_eq!(criteria.apply(&roster()).len(), 3);
    }
}

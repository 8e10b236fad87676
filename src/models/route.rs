//! Modelo de Ruta
//!
//! Una ruta es una entidad derivada: existe exactamente mientras algún
//! trabajador del registro la referencia por nombre. Nunca se almacena
//! de forma independiente, por lo que no puede divergir del registro.

use serde::{Deserialize, Serialize};

use crate::models::worker::Worker;

/// Ruta de recolección con sus miembros en orden de inserción del registro
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub name: String,
    pub members: Vec<Worker>,
}

impl Route {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// true si todos los miembros siguen en estado borrador
    pub fn is_draft(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(|w| w.is_draft)
    }
}

//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del núcleo de
//! asignación de personal a rutas de recolección.

pub mod notification;
pub mod route;
pub mod worker;

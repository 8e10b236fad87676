//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de entorno y los valores por
//! defecto de la sesión.

pub mod environment;

pub use environment::*;

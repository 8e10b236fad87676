//! Controllers module
//!
//! Este módulo contiene el controlador que orquesta los intents del
//! operador sobre el registro y los diálogos externos.

pub mod assignment_controller;

pub use assignment_controller::*;

//! Núcleo de gestión de personal de rutas de recolección
//!
//! Mantiene un registro plano de trabajadores y una vista agrupada por
//! ruta siempre consistentes bajo operaciones interactivas de edición,
//! movimiento, filtrado y eliminación, cada una protegida por un paso
//! de confirmación o validación. Todo el estado vive en memoria durante
//! una sesión interactiva; no hay persistencia ni transporte de red.

pub mod config;
pub mod controllers;
pub mod dialogs;
pub mod dto;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

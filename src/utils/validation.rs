//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! del registro de trabajadores.

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;
use validator::ValidationError;

lazy_static! {
    /// Formato de código de empleado: W seguido de dígitos (ej: W0042)
    static ref EMPLOYEE_CODE_RE: Regex = Regex::new(r"^W\d{1,6}$").unwrap();
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_digit(10)).collect::<String>();
    if clean_phone.len() < 10 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de código de empleado
pub fn validate_employee_code(value: &str) -> Result<(), ValidationError> {
    if !EMPLOYEE_CODE_RE.is_match(value) {
        let mut error = ValidationError::new("employee_code");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"W followed by digits".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar nombre de ruta
pub fn validate_route_name(value: &str) -> Result<(), ValidationError> {
    validate_not_empty(value)?;
    validate_length(value, 1, 80)
}

//! DTOs del sistema
//!
//! Requests y responses que cruzan la frontera entre el núcleo y las
//! superficies externas (diálogos y shell de la sesión).

pub mod route_dto;
pub mod worker_dto;

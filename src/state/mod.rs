// ============================================================================
// STATE MODULE - Contenedores de estado por página + notificaciones
// ============================================================================

pub mod lifecycle;
pub mod catalog_state;
pub mod admin_state;
pub mod app_state;

pub use lifecycle::*;
pub use catalog_state::*;
pub use admin_state::*;
pub use app_state::*;

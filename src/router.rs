// ============================================================================
// ROUTER - Rutas de la app (History API, sin recargar la página)
// ============================================================================

use wasm_bindgen::JsValue;
use crate::utils::constants::{ADMIN_PATH, CARS_PATH};

/// Páginas navegables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Cars,
    Admin,
}

impl Route {
    /// Cualquier ruta desconocida cae en el catálogo
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed == ADMIN_PATH {
            Route::Admin
        } else {
            Route::Cars
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Cars => CARS_PATH,
            Route::Admin => ADMIN_PATH,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Cars => "Car List",
            Route::Admin => "Admin Page",
        }
    }
}

/// Ruta actual según window.location.pathname
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

/// Añadir entrada al historial (pushState) sin recargar
pub fn push_route(route: Route) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let history = window.history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))?;
    log::info!("🧭 [ROUTER] pushState {}", route.path());
    Ok(())
}

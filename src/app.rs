// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::Route;
use crate::state::{AppState, PageMount};
use crate::viewmodels::{AdminViewModel, CatalogViewModel};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada sobre #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(&CONFIG.default_country_code);

        // Re-render en el siguiente tick para agrupar varios cambios
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// `route` ya está en pantalla
    pub fn is_showing(&self, route: Route) -> bool {
        self.state.is_showing(route)
    }

    /// Desmontar la página actual, montar `route` y lanzar su fetch inicial.
    /// Si `route` ya está montada no se toca.
    pub fn navigate(&self, route: Route) -> Result<(), JsValue> {
        match self.state.mount_route(route) {
            Some(PageMount::Cars(token)) => {
                log::info!("🧭 [APP] Montando {:?}", route);
                CatalogViewModel::new().load_cars(&self.state, token);
            }
            Some(PageMount::Admin(token)) => {
                log::info!("🧭 [APP] Montando {:?}", route);
                AdminViewModel::new().load_bookings(&self.state, token);
            }
            None => {
                log::debug!("🧭 [APP] {:?} ya está montada", route);
                return Ok(());
            }
        }
        self.render()
    }

    /// Re-render completo
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)
    }
}

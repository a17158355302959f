// ============================================================================
// APP VIEW - Shell: navegación + página de la ruta actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::views::{render_admin_dashboard, render_car_list, render_nav};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.current_route();
    log::debug!("🎬 [APP] render_app() ruta {:?}", route);

    let container = ElementBuilder::new("div")?
        .class("app-container")
        .build();

    append_child(&container, &render_nav(route)?)?;

    let page = match route {
        Route::Cars => render_car_list(state)?,
        Route::Admin => render_admin_dashboard(state)?,
    };
    append_child(&container, &page)?;

    Ok(container)
}

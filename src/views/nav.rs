// ============================================================================
// NAV - Barra de navegación (Car List / Admin Page)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;

pub fn render_nav(current: Route) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?
        .class("app-nav")
        .build();

    for route in [Route::Cars, Route::Admin] {
        let class = if route == current { "nav-link active" } else { "nav-link" };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", route.path())?
            .text(route.label())
            .build();

        // Navegación sin recargar (pushState)
        on_click(&link, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            crate::navigate_to(route);
        })?;

        append_child(&nav, &link)?;
    }

    Ok(nav)
}

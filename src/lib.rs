// ============================================================================
// AUTODEAL PWA - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lanzan llamadas async y aplican resultados
// - Services: SOLO comunicación API
// - State: Un contenedor por página con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
mod app;
mod dom;
mod viewmodels;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::router::Route;

// Instancia única de App (hilo único de WASM)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 [APP] AutoDeal - Rust Puro + MVVM (env: {}, backend: {})",
        CONFIG.environment,
        CONFIG.backend_url()
    );

    let app = App::new()?;
    app.navigate(router::current_route())?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Botones atrás/adelante del navegador. Se registra una sola vez en start().
    dom::on_window_event("popstate", move |_e: web_sys::Event| {
        let route = router::current_route();
        log::info!("🧭 [ROUTER] popstate → {:?}", route);
        with_app(|app| app.navigate(route));
    })?;

    Ok(())
}

fn with_app<F>(f: F)
where
    F: FnOnce(&App) -> Result<(), JsValue>,
{
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = f(app) {
                log::error!("❌ [APP] Error: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [APP] App no está inicializada"),
    });
}

/// Re-render completo de la app
pub fn rerender_app() {
    with_app(|app| app.render());
}

/// Navegar a `route` (pushState + montar la página).
/// Sin efecto si ya estamos en `route`.
pub fn navigate_to(route: Route) {
    with_app(|app| {
        if app.is_showing(route) {
            return Ok(());
        }
        if let Err(e) = router::push_route(route) {
            log::error!("❌ [ROUTER] pushState falló: {:?}", e);
        }
        app.navigate(route)
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

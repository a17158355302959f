use wasm_bindgen::JsValue;

/// Mostrar un alert() bloqueante del navegador
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("⚠️ [ALERT] Sin window, mensaje no mostrado: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        web_sys::console::error_1(&JsValue::from_str(&format!("❌ Error mostrando alert: {:?}", e)));
    }
}

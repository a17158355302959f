// ============================================================================
// EVENT HANDLING - Helpers para listeners
// ============================================================================
// Los listeners de elementos usan closure.forget(): cuando el render completo
// hace set_inner_html(""), el navegador libera los listeners del elemento.
// Los listeners globales (window) solo se registran una vez en start().
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, MouseEvent};

fn listen(
    target: &EventTarget,
    event_type: &str,
    handler: Box<dyn FnMut(Event)>,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click handler
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Input handler (texto)
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "input", Box::new(handler))
}

/// Change handler (<select>)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "change", Box::new(handler))
}

/// Listener global en window (registrar UNA sola vez)
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    listen(&window, event_type, Box::new(handler))
}

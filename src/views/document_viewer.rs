// ============================================================================
// DOCUMENT VIEWER - Modal a pantalla completa con el documento (DL)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::AdminViewModel;

pub fn render_document_viewer(state: &AppState, url: &str) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?
        .id("document-viewer")?
        .class("viewer-overlay")
        .build();

    // Click fuera de la imagen cierra el visor
    {
        let state = state.clone();
        on_click(&overlay, move |_| {
            AdminViewModel::new().close_document(&state);
        })?;
    }

    let content = ElementBuilder::new("div")?
        .class("viewer-content")
        .build();
    on_click(&content, move |e: web_sys::MouseEvent| {
        e.stop_propagation();
    })?;

    let close = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("viewer-close")
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&close, move |_| {
            AdminViewModel::new().close_document(&state);
        })?;
    }
    append_child(&content, &close)?;

    let image = ElementBuilder::new("img")?
        .class("viewer-image")
        .attr("src", url)?
        .attr("alt", "Large View")?
        .build();
    append_child(&content, &image)?;

    append_child(&overlay, &content)?;
    Ok(overlay)
}

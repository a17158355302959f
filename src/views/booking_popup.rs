// ============================================================================
// BOOKING POPUP - Teléfono + prefijo para una reserva Buy/Rent
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, event_value, on_change, on_click, on_input, ElementBuilder};
use crate::state::{AppState, BookingSelection};
use crate::utils::constants::COUNTRY_CODES;
use crate::viewmodels::CatalogViewModel;

pub fn render_booking_popup(
    state: &AppState,
    selection: &BookingSelection,
    country_code: &str,
    phone: &str,
    submitting: bool,
) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?
        .id("booking-popup")?
        .class("popup-overlay")
        .build();

    let popup = ElementBuilder::new("div")?
        .class("popup")
        .child(
            ElementBuilder::new("h3")?
                .class("popup-title")
                .text("Enter Phone Number")
                .build(),
        )?
        .build();

    // "Car: <b>Brand Model</b> (Buy)"
    let summary = ElementBuilder::new("p")?
        .class("popup-car")
        .text("Car: ")
        .child(ElementBuilder::new("b")?.text(&selection.car.display_name()).build())?
        .build();
    summary.append_with_str_1(&format!(" ({})", selection.booking_type))?;
    append_child(&popup, &summary)?;

    let phone_row = ElementBuilder::new("div")?
        .class("phone-row")
        .build();

    let select = ElementBuilder::new("select")?
        .class("country-code")
        .build();
    for (code, label) in COUNTRY_CODES {
        let option = ElementBuilder::new("option")?
            .attr("value", code)?
            .flag("selected", *code == country_code)?
            .text(label)
            .build();
        append_child(&select, &option)?;
    }
    {
        let state = state.clone();
        on_change(&select, move |e: web_sys::Event| {
            if let Some(value) = event_value(&e) {
                CatalogViewModel::new().set_country_code(&state, &value);
            }
        })?;
    }
    append_child(&phone_row, &select)?;

    let input = ElementBuilder::new("input")?
        .class("phone-input")
        .attr("type", "text")?
        .attr("placeholder", "Phone Number")?
        .attr("value", phone)?
        .build();
    {
        let state = state.clone();
        on_input(&input, move |e: web_sys::Event| {
            if let Some(value) = event_value(&e) {
                CatalogViewModel::new().set_phone(&state, &value);
            }
        })?;
    }
    append_child(&phone_row, &input)?;
    append_child(&popup, &phone_row)?;

    let buttons = ElementBuilder::new("div")?
        .class("popup-buttons")
        .build();

    let submit = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(if submitting { "btn-submit submitting" } else { "btn-submit" })
        .flag("disabled", submitting)?
        .text(if submitting { "Submitting..." } else { "Submit" })
        .build();
    {
        let state = state.clone();
        on_click(&submit, move |_| {
            CatalogViewModel::new().submit(&state);
        })?;
    }
    append_child(&buttons, &submit)?;

    let close = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .text("Close")
        .build();
    {
        let state = state.clone();
        on_click(&close, move |_| {
            CatalogViewModel::new().close_booking(&state);
        })?;
    }
    append_child(&buttons, &close)?;
    append_child(&popup, &buttons)?;

    append_child(&overlay, &popup)?;
    Ok(overlay)
}

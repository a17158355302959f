// ============================================================================
// ADMIN DASHBOARD - Tabla de reservas + cambio de estado
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, event_value, on_change, on_click, ElementBuilder};
use crate::models::{Booking, BookingStatus};
use crate::state::{AdminDisplay, AppState};
use crate::viewmodels::AdminViewModel;
use crate::views::render_document_viewer;

const COLUMNS: [&str; 8] = [
    "Booking ID",
    "Phone",
    "DL Image",
    "Car Brand",
    "Car Model",
    "Status",
    "Action",
    "Booking Type",
];

pub fn render_admin_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let admin = state.admin.borrow();

    let page = ElementBuilder::new("div")?
        .class("admin-page")
        .build();

    // Loading y error ocupan toda la página (sin tabla ni visor)
    match admin.display() {
        AdminDisplay::Loading => {
            let loading = ElementBuilder::new("p")?
                .class("admin-loading")
                .text("Loading bookings...")
                .build();
            append_child(&page, &loading)?;
            return Ok(page);
        }
        AdminDisplay::Error(message) => {
            let error = ElementBuilder::new("p")?
                .class("admin-error")
                .text(message)
                .build();
            append_child(&page, &error)?;
            return Ok(page);
        }
        AdminDisplay::Empty => {
            append_child(&page, &render_title()?)?;
            let empty = ElementBuilder::new("p")?
                .class("admin-empty")
                .text("No bookings found.")
                .build();
            append_child(&page, &empty)?;
        }
        AdminDisplay::Table(bookings) => {
            append_child(&page, &render_title()?)?;
            append_child(&page, &render_table(state, bookings)?)?;
        }
    }

    if let Some(url) = &admin.viewing_document {
        append_child(&page, &render_document_viewer(state, url)?)?;
    }

    Ok(page)
}

fn render_title() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("h1")?
        .class("admin-title")
        .text("Admin Dashboard")
        .build())
}

fn render_table(state: &AppState, bookings: &[Booking]) -> Result<Element, JsValue> {
    let table = ElementBuilder::new("table")?
        .class("bookings-table")
        .attr("data-count", &bookings.len().to_string())?
        .build();

    let header_row = ElementBuilder::new("tr")?.build();
    for column in COLUMNS {
        append_child(&header_row, &ElementBuilder::new("th")?.text(column).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(header_row)?.build();
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for booking in bookings {
        append_child(&tbody, &render_row(state, booking)?)?;
    }
    append_child(&table, &tbody)?;

    Ok(table)
}

fn render_row(state: &AppState, booking: &Booking) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?
        .attr("data-booking-id", &booking.id)?
        .build();

    append_child(&row, &text_cell(&booking.id)?)?;
    append_child(&row, &text_cell(&booking.phone)?)?;

    // Miniatura del documento (click → visor)
    let image_cell = ElementBuilder::new("td")?.build();
    match booking.document() {
        Some(url) => {
            let thumbnail = ElementBuilder::new("img")?
                .class("dl-thumbnail")
                .attr("src", url)?
                .attr("alt", "DL")?
                .build();
            let state = state.clone();
            let url = url.to_string();
            on_click(&thumbnail, move |_| {
                AdminViewModel::new().open_document(&state, &url);
            })?;
            append_child(&image_cell, &thumbnail)?;
        }
        None => image_cell.set_text_content(Some("No Image")),
    }
    append_child(&row, &image_cell)?;

    append_child(&row, &text_cell(booking.car_brand())?)?;
    append_child(&row, &text_cell(booking.car_model())?)?;

    let status_cell = text_cell(booking.status.as_str())?;
    status_cell.set_class_name("status capitalize");
    append_child(&row, &status_cell)?;

    let action_cell = ElementBuilder::new("td")?.build();
    append_child(&action_cell, &render_status_select(state, booking)?)?;
    append_child(&row, &action_cell)?;

    append_child(&row, &text_cell(&booking.booking_type)?)?;

    Ok(row)
}

fn render_status_select(state: &AppState, booking: &Booking) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?
        .class("status-select")
        .build();
    for status in BookingStatus::ALL {
        let option = ElementBuilder::new("option")?
            .attr("value", status.as_str())?
            .flag("selected", status == booking.status)?
            .text(status.label())
            .build();
        append_child(&select, &option)?;
    }

    let state = state.clone();
    let booking_id = booking.id.clone();
    on_change(&select, move |e: web_sys::Event| {
        match event_value(&e).as_deref().and_then(BookingStatus::parse) {
            Some(status) => AdminViewModel::new().update_status(&state, booking_id.clone(), status),
            None => log::warn!("⚠️ [ADMIN] Estado desconocido en el select"),
        }
    })?;

    Ok(select)
}

fn text_cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

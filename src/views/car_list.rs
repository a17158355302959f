// ============================================================================
// CAR LIST VIEW - Catálogo de coches (una card por coche)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::{BookingType, Car};
use crate::state::AppState;
use crate::viewmodels::CatalogViewModel;
use crate::views::render_booking_popup;

pub fn render_car_list(state: &AppState) -> Result<Element, JsValue> {
    let catalog = state.catalog.borrow();

    let page = ElementBuilder::new("div")?
        .class("catalog-page")
        .build();

    let title = ElementBuilder::new("h1")?
        .class("catalog-title")
        .text("AutoDeal Marketplace")
        .build();
    append_child(&page, &title)?;

    let grid = ElementBuilder::new("div")?
        .class("car-grid")
        .attr("data-count", &catalog.cars.len().to_string())?
        .build();
    for car in &catalog.cars {
        append_child(&grid, &render_car_card(state, car)?)?;
    }
    append_child(&page, &grid)?;

    if let Some(selection) = &catalog.selection {
        let popup = render_booking_popup(
            state,
            selection,
            &catalog.country_code,
            &catalog.phone,
            catalog.submitting_booking,
        )?;
        append_child(&page, &popup)?;
    }

    Ok(page)
}

fn render_car_card(state: &AppState, car: &Car) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("car-card")
        .attr("data-car-id", &car.id)?
        .build();

    let image = ElementBuilder::new("img")?
        .class("car-image")
        .attr("src", &car.image)?
        .attr("alt", &car.model)?
        .build();
    append_child(&card, &image)?;

    let info = ElementBuilder::new("div")?
        .class("car-info")
        .child(
            ElementBuilder::new("h3")?
                .class("car-name")
                .text(&car.display_name())
                .build(),
        )?
        .build();

    let rows = [
        ("Year:", car.year.to_string()),
        ("Color:", car.color.clone()),
        ("Price:", format!("₹{}", car.price)),
        ("Fuel:", car.fuel.clone()),
        ("Trans:", car.transmission.clone()),
        ("Mileage:", format!("{} km", car.mileage)),
    ];
    for (label, value) in rows {
        append_child(&info, &attribute_row(label, &value)?)?;
    }

    let actions = ElementBuilder::new("div")?
        .class("car-actions")
        .build();
    for (booking_type, class) in [(BookingType::Buy, "btn-buy"), (BookingType::Rent, "btn-rent")] {
        let button = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class(class)
            .text(booking_type.as_str())
            .build();

        let state = state.clone();
        let car = car.clone();
        on_click(&button, move |_| {
            CatalogViewModel::new().open_booking(&state, car.clone(), booking_type);
        })?;
        append_child(&actions, &button)?;
    }
    append_child(&info, &actions)?;
    append_child(&card, &info)?;

    Ok(card)
}

/// <p><b>Label</b> valor</p>
fn attribute_row(label: &str, value: &str) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("p")?
        .class("car-attr")
        .child(ElementBuilder::new("b")?.text(label).build())?
        .build();
    row.append_with_str_1(&format!(" {}", value))?;
    Ok(row)
}

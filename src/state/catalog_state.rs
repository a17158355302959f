// ============================================================================
// CATALOG STATE - Estado de la página de coches + popup de reserva
// ============================================================================

use crate::models::{BookingType, Car, RegisterBookingRequest};
use crate::state::lifecycle::{Lifecycle, MountToken};
use crate::utils::constants::MSG_BOOKING_REGISTERED;

/// Coche + tipo elegidos. El popup está abierto mientras exista.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingSelection {
    pub car: Car,
    pub booking_type: BookingType,
}

#[derive(Clone, Debug)]
pub struct CatalogState {
    pub lifecycle: Lifecycle,
    pub cars: Vec<Car>,
    pub fetching_cars: bool,
    pub selection: Option<BookingSelection>,
    pub phone: String,
    pub country_code: String,
    pub submitting_booking: bool,
    default_country_code: String,
}

impl CatalogState {
    pub fn new(default_country_code: &str) -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            cars: Vec::new(),
            fetching_cars: false,
            selection: None,
            phone: String::new(),
            country_code: default_country_code.to_string(),
            submitting_booking: false,
            default_country_code: default_country_code.to_string(),
        }
    }

    /// Montar la página: estado limpio y fetch de coches en curso
    pub fn mount(&mut self) -> MountToken {
        let lifecycle = std::mem::take(&mut self.lifecycle);
        *self = Self::new(&self.default_country_code.clone());
        self.lifecycle = lifecycle;
        self.fetching_cars = true;
        self.lifecycle.mount()
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    /// Resultado de GET cars. Devuelve el mensaje de alert si falló.
    /// En error la lista anterior se conserva.
    pub fn apply_cars(&mut self, token: MountToken, result: Result<Vec<Car>, String>) -> Option<String> {
        if !self.lifecycle.is_current(token) {
            log::warn!("⚠️ [CATALOG] Respuesta de coches descartada (página desmontada)");
            return None;
        }
        self.fetching_cars = false;
        match result {
            Ok(cars) => {
                self.cars = cars;
                None
            }
            Err(e) => Some(format!("Error: {}", e)),
        }
    }

    pub fn is_popup_open(&self) -> bool {
        self.selection.is_some()
    }

    pub fn open_booking(&mut self, car: Car, booking_type: BookingType) {
        log::info!("🛒 [CATALOG] Popup {} para {}", booking_type, car.display_name());
        self.selection = Some(BookingSelection { car, booking_type });
    }

    /// Cerrar popup sin enviar: los campos vuelven a sus valores por defecto
    pub fn close_booking(&mut self) {
        self.selection = None;
        self.reset_inputs();
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_string();
    }

    pub fn set_country_code(&mut self, country_code: &str) {
        self.country_code = country_code.to_string();
    }

    /// Teléfono completo: prefijo + número, sin separador ni validación
    pub fn full_phone(&self) -> String {
        format!("{}{}", self.country_code, self.phone)
    }

    /// Iniciar envío. None si no hay coche elegido o ya hay un envío en curso.
    pub fn begin_submit(&mut self) -> Option<RegisterBookingRequest> {
        if self.submitting_booking {
            return None;
        }
        let selection = self.selection.as_ref()?;
        let request = RegisterBookingRequest {
            phone: self.full_phone(),
            car_id: selection.car.id.clone(),
            booking_type: selection.booking_type,
        };
        self.submitting_booking = true;
        Some(request)
    }

    /// Resultado de POST register. Devuelve el mensaje de alert.
    pub fn finish_submit(&mut self, token: MountToken, result: Result<(), String>) -> Option<String> {
        if !self.lifecycle.is_current(token) {
            log::warn!("⚠️ [CATALOG] Respuesta de reserva descartada (página desmontada)");
            return None;
        }
        self.submitting_booking = false;
        match result {
            Ok(()) => {
                self.close_booking();
                Some(MSG_BOOKING_REGISTERED.to_string())
            }
            Err(e) => Some(format!("Error: {}", e)),
        }
    }

    fn reset_inputs(&mut self) {
        self.phone.clear();
        self.country_code = self.default_country_code.clone();
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(crate::utils::constants::DEFAULT_COUNTRY_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: &str) -> Car {
        Car {
            id: id.to_string(),
            brand: "Maruti".to_string(),
            model: "Swift".to_string(),
            ..Car::default()
        }
    }

    fn mounted() -> (CatalogState, MountToken) {
        let mut state = CatalogState::default();
        let token = state.mount();
        (state, token)
    }

    #[test]
    fn mount_starts_fetching() {
        let (state, _) = mounted();
        assert!(state.fetching_cars);
        assert!(!state.submitting_booking);
        assert!(state.cars.is_empty());
    }

    #[test]
    fn successful_fetch_replaces_list() {
        let (mut state, token) = mounted();
        let alert = state.apply_cars(token, Ok(vec![car("a"), car("b"), car("c")]));
        assert_eq!(alert, None);
        assert_eq!(state.cars.len(), 3);
        assert!(!state.fetching_cars);
    }

    #[test]
    fn empty_fetch_is_not_an_error() {
        let (mut state, token) = mounted();
        assert_eq!(state.apply_cars(token, Ok(vec![])), None);
        assert!(state.cars.is_empty());
    }

    #[test]
    fn failed_fetch_alerts_and_keeps_previous_list() {
        let (mut state, token) = mounted();
        state.apply_cars(token, Ok(vec![car("a")]));

        let alert = state.apply_cars(token, Err("Network error: offline".to_string()));
        assert_eq!(alert.as_deref(), Some("Error: Network error: offline"));
        assert_eq!(state.cars, vec![car("a")]);
        assert!(!state.fetching_cars);
    }

    #[test]
    fn late_fetch_after_unmount_is_discarded() {
        let (mut state, token) = mounted();
        state.unmount();
        assert_eq!(state.apply_cars(token, Ok(vec![car("a")])), None);
        assert!(state.cars.is_empty());
        assert!(state.fetching_cars);
    }

    #[test]
    fn remount_discards_results_of_previous_mount() {
        let (mut state, old_token) = mounted();
        state.unmount();
        let token = state.mount();

        state.apply_cars(old_token, Ok(vec![car("stale")]));
        assert!(state.cars.is_empty());
        state.apply_cars(token, Ok(vec![car("fresh")]));
        assert_eq!(state.cars, vec![car("fresh")]);
    }

    #[test]
    fn closing_popup_resets_inputs() {
        let (mut state, _) = mounted();
        state.open_booking(car("a"), BookingType::Buy);
        state.set_country_code("+44");
        state.set_phone("7700900123");
        state.close_booking();

        assert!(!state.is_popup_open());
        state.open_booking(car("b"), BookingType::Rent);
        assert_eq!(state.phone, "");
        assert_eq!(state.country_code, "+91");
    }

    #[test]
    fn submit_concatenates_phone_without_validation() {
        let (mut state, _) = mounted();
        state.open_booking(car("c1"), BookingType::Buy);
        state.set_phone("9876543210");

        let request = state.begin_submit().unwrap();
        assert_eq!(request.phone, "+919876543210");
        assert_eq!(request.car_id, "c1");
        assert_eq!(request.booking_type, BookingType::Buy);

        let (mut state, _) = mounted();
        state.open_booking(car("c1"), BookingType::Rent);
        state.set_country_code("+1");
        state.set_phone(" abc-12 ");
        assert_eq!(state.begin_submit().unwrap().phone, "+1 abc-12 ");
    }

    #[test]
    fn submit_is_noop_without_selection_or_while_in_flight() {
        let (mut state, _) = mounted();
        assert_eq!(state.begin_submit(), None);
        assert!(!state.submitting_booking);

        state.open_booking(car("a"), BookingType::Buy);
        assert!(state.begin_submit().is_some());
        assert!(state.submitting_booking);
        assert_eq!(state.begin_submit(), None);
    }

    #[test]
    fn successful_submit_closes_popup_and_clears_flag() {
        let (mut state, token) = mounted();
        state.open_booking(car("a"), BookingType::Rent);
        state.set_country_code("+971");
        state.set_phone("501234567");
        state.begin_submit();

        let alert = state.finish_submit(token, Ok(()));
        assert_eq!(alert.as_deref(), Some("User registered successfully!"));
        assert!(!state.is_popup_open());
        assert!(!state.submitting_booking);
        assert_eq!(state.phone, "");
        assert_eq!(state.country_code, "+91");
    }

    #[test]
    fn failed_submit_keeps_popup_open() {
        let (mut state, token) = mounted();
        state.open_booking(car("a"), BookingType::Buy);
        state.set_phone("123");
        state.begin_submit();

        let alert = state.finish_submit(token, Err("HTTP 500: Internal Server Error".to_string()));
        assert_eq!(alert.as_deref(), Some("Error: HTTP 500: Internal Server Error"));
        assert!(state.is_popup_open());
        assert!(!state.submitting_booking);
        assert_eq!(state.phone, "123");
    }

    #[test]
    fn fetch_completion_does_not_touch_submit_flag() {
        let (mut state, token) = mounted();
        state.open_booking(car("a"), BookingType::Buy);
        state.begin_submit();
        state.apply_cars(token, Ok(vec![car("a")]));
        assert!(state.submitting_booking);
    }
}

// ============================================================================
// CATALOG VIEWMODEL - Lógica UI del catálogo y del popup de reserva
// ============================================================================
// Lanza las llamadas async y aplica el resultado al CatalogState
// solo si la página sigue montada (MountToken)
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use crate::models::{BookingType, Car};
use crate::services::ApiClient;
use crate::state::{AppState, MountToken};
use crate::utils::alert;

#[derive(Clone)]
pub struct CatalogViewModel {
    api_client: ApiClient,
}

impl CatalogViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Fetch inicial de coches (al montar la página)
    pub fn load_cars(&self, state: &AppState, token: MountToken) {
        log::info!("🚗 [CATALOG] Cargando coches...");
        let api = self.api_client.clone();
        let state = state.clone();

        spawn_local(async move {
            let result = api.get_cars().await;
            if let Err(e) = &result {
                log::error!("❌ [CATALOG] Error cargando coches: {}", e);
            }

            let message = state.catalog.borrow_mut().apply_cars(token, result);
            if let Some(message) = message {
                alert(&message);
            }
            state.notify_subscribers();
        });
    }

    pub fn open_booking(&self, state: &AppState, car: Car, booking_type: BookingType) {
        state.catalog.borrow_mut().open_booking(car, booking_type);
        state.notify_subscribers();
    }

    pub fn close_booking(&self, state: &AppState) {
        state.catalog.borrow_mut().close_booking();
        state.notify_subscribers();
    }

    // Los inputs no re-renderizan (se perdería el foco)
    pub fn set_phone(&self, state: &AppState, phone: &str) {
        state.catalog.borrow_mut().set_phone(phone);
    }

    pub fn set_country_code(&self, state: &AppState, country_code: &str) {
        state.catalog.borrow_mut().set_country_code(country_code);
    }

    /// Enviar reserva. No hace nada sin coche elegido o con un envío en curso.
    pub fn submit(&self, state: &AppState) {
        let (request, token) = {
            let mut catalog = state.catalog.borrow_mut();
            let Some(token) = catalog.lifecycle.token() else {
                return;
            };
            let Some(request) = catalog.begin_submit() else {
                log::debug!("⏳ [CATALOG] Submit ignorado (sin selección o envío en curso)");
                return;
            };
            (request, token)
        };
        // Mostrar "Submitting..."
        state.notify_subscribers();

        let api = self.api_client.clone();
        let state = state.clone();
        spawn_local(async move {
            let result = api.register_booking(&request).await;
            match &result {
                Ok(()) => log::info!("✅ [CATALOG] Reserva {} registrada para {}", request.booking_type, request.car_id),
                Err(e) => log::error!("❌ [CATALOG] Error registrando reserva: {}", e),
            }

            let message = state.catalog.borrow_mut().finish_submit(token, result);
            if let Some(message) = message {
                alert(&message);
            }
            state.notify_subscribers();
        });
    }
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ADMIN VIEWMODEL - Reservas, cambio de estado y visor de documentos
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use crate::models::BookingStatus;
use crate::services::ApiClient;
use crate::state::{AppState, MountToken};
use crate::utils::alert;

#[derive(Clone)]
pub struct AdminViewModel {
    api_client: ApiClient,
}

impl AdminViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Fetch de reservas (al montar la página)
    pub fn load_bookings(&self, state: &AppState, token: MountToken) {
        log::info!("📋 [ADMIN] Cargando reservas...");
        let api = self.api_client.clone();
        let state = state.clone();

        spawn_local(async move {
            let result = api.get_bookings().await;
            let applied = state.admin.borrow_mut().apply_bookings(token, result);
            if applied {
                state.notify_subscribers();
            }
        });
    }

    /// PUT del nuevo estado; el estado local cambia solo tras la respuesta OK
    pub fn update_status(&self, state: &AppState, booking_id: String, status: BookingStatus) {
        let Some(token) = state.admin.borrow().lifecycle.token() else {
            return;
        };
        log::info!("🔄 [ADMIN] Reserva {} → {}", booking_id, status.as_str());

        let api = self.api_client.clone();
        let state = state.clone();
        spawn_local(async move {
            let result = api.update_booking_status(&booking_id, status).await;
            let message = state
                .admin
                .borrow_mut()
                .apply_status_update(token, &booking_id, status, result);
            if let Some(message) = message {
                alert(&message);
            }
            state.notify_subscribers();
        });
    }

    pub fn open_document(&self, state: &AppState, url: &str) {
        state.admin.borrow_mut().open_document(url);
        state.notify_subscribers();
    }

    pub fn close_document(&self, state: &AppState) {
        state.admin.borrow_mut().close_document();
        state.notify_subscribers();
    }
}

impl Default for AdminViewModel {
    fn default() -> Self {
        Self::new()
    }
}

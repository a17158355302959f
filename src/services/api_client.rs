// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// Todos los errores se reducen a un String legible
// ============================================================================

use gloo_net::http::{Request, Response};
use crate::config::CONFIG;
use crate::models::{
    Booking, BookingStatus, BookingsResponse, Car, CarsResponse, RegisterBookingRequest,
    UpdateStatusRequest,
};
use crate::utils::constants::{BOOKINGS_ENDPOINT, BOOKING_ENDPOINT, CARS_ENDPOINT, REGISTER_ENDPOINT};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn cars_url(&self) -> String {
        format!("{}{}", self.base_url, CARS_ENDPOINT)
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url, REGISTER_ENDPOINT)
    }

    pub fn bookings_url(&self) -> String {
        format!("{}{}", self.base_url, BOOKINGS_ENDPOINT)
    }

    pub fn booking_url(&self, booking_id: &str) -> String {
        format!("{}{}/{}", self.base_url, BOOKING_ENDPOINT, booking_id)
    }

    /// Listar coches del catálogo
    pub async fn get_cars(&self) -> Result<Vec<Car>, String> {
        let url = self.cars_url();
        log::info!("🚗 [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        let response = ensure_ok(response)?;

        let cars = response
            .json::<CarsResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?
            .into_cars();

        log::info!("✅ [API] {} coches recibidos", cars.len());
        Ok(cars)
    }

    /// Registrar reserva (Buy/Rent). El body de la respuesta se ignora.
    pub async fn register_booking(&self, request: &RegisterBookingRequest) -> Result<(), String> {
        let url = self.register_url();
        log::info!(
            "📝 [API] POST {} (car: {}, tipo: {})",
            url,
            request.car_id,
            request.booking_type
        );

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        ensure_ok(response)?;

        Ok(())
    }

    /// Listar reservas (admin)
    pub async fn get_bookings(&self) -> Result<Vec<Booking>, String> {
        let url = self.bookings_url();
        log::info!("📋 [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        let response = ensure_ok(response)?;

        let bookings = response
            .json::<BookingsResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?
            .into_bookings();

        log::info!("✅ [API] {} reservas recibidas", bookings.len());
        Ok(bookings)
    }

    /// Actualizar estado de verificación de una reserva
    pub async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<(), String> {
        let url = self.booking_url(booking_id);
        log::info!("🔄 [API] PUT {} → {}", url, status.as_str());

        let response = Request::put(&url)
            .json(&UpdateStatusRequest { status })
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        ensure_ok(response)?;

        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Cualquier status fuera de 2xx es un error
fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        Ok(response)
    } else {
        Err(format!("HTTP {}: {}", response.status(), response.status_text()))
    }
}

// ============================================================================
// ADMIN STATE - Reservas, estado de carga y visor de documentos
// ============================================================================

use crate::models::{Booking, BookingStatus};
use crate::state::lifecycle::{Lifecycle, MountToken};
use crate::utils::constants::{MSG_FETCH_BOOKINGS_FAILED, MSG_UPDATE_STATUS_FAILED};

/// Qué muestra la página admin. El error excluye la tabla.
#[derive(Debug, PartialEq)]
pub enum AdminDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Table(&'a [Booking]),
}

#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub lifecycle: Lifecycle,
    pub bookings: Vec<Booking>,
    pub loading: bool,
    pub error: Option<String>,
    /// Documento abierto en el visor (None = modal cerrado)
    pub viewing_document: Option<String>,
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Montar la página: loading y sin error
    pub fn mount(&mut self) -> MountToken {
        let lifecycle = std::mem::take(&mut self.lifecycle);
        *self = Self {
            lifecycle,
            loading: true,
            ..Self::default()
        };
        self.lifecycle.mount()
    }

    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }

    /// Resultado de GET bookings. Devuelve false si se descartó.
    pub fn apply_bookings(&mut self, token: MountToken, result: Result<Vec<Booking>, String>) -> bool {
        if !self.lifecycle.is_current(token) {
            log::warn!("⚠️ [ADMIN] Respuesta de reservas descartada (página desmontada)");
            return false;
        }
        self.loading = false;
        match result {
            Ok(bookings) => {
                self.bookings = bookings;
                self.error = None;
            }
            Err(e) => {
                log::error!("❌ [ADMIN] Error cargando reservas: {}", e);
                self.error = Some(MSG_FETCH_BOOKINGS_FAILED.to_string());
            }
        }
        true
    }

    /// Resultado de PUT status. Solo cambia el estado local si el backend respondió OK.
    /// Devuelve el mensaje de alert si falló.
    pub fn apply_status_update(
        &mut self,
        token: MountToken,
        booking_id: &str,
        status: BookingStatus,
        result: Result<(), String>,
    ) -> Option<String> {
        if !self.lifecycle.is_current(token) {
            log::warn!("⚠️ [ADMIN] Respuesta de estado descartada para {}", booking_id);
            return None;
        }
        match result {
            Ok(()) => {
                self.bookings
                    .iter_mut()
                    .filter(|b| b.id == booking_id)
                    .for_each(|b| b.status = status);
                None
            }
            Err(e) => {
                log::error!("❌ [ADMIN] Error actualizando {}: {}", booking_id, e);
                Some(MSG_UPDATE_STATUS_FAILED.to_string())
            }
        }
    }

    /// Abrir visor (reemplaza cualquier documento abierto)
    pub fn open_document(&mut self, url: &str) {
        self.viewing_document = Some(url.to_string());
    }

    pub fn close_document(&mut self) {
        self.viewing_document = None;
    }

    pub fn display(&self) -> AdminDisplay<'_> {
        if self.loading {
            AdminDisplay::Loading
        } else if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            AdminDisplay::Error(error)
        } else if self.bookings.is_empty() {
            AdminDisplay::Empty
        } else {
            AdminDisplay::Table(&self.bookings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingCar;

    fn booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            phone: format!("+91{}", id),
            document_url: format!("https://docs/{}.png", id),
            status,
            booking_type: "Buy".to_string(),
            car: Some(BookingCar {
                brand: "Hyundai".to_string(),
                model: "Creta".to_string(),
            }),
        }
    }

    fn loaded(bookings: Vec<Booking>) -> (AdminState, MountToken) {
        let mut state = AdminState::new();
        let token = state.mount();
        state.apply_bookings(token, Ok(bookings));
        (state, token)
    }

    #[test]
    fn mount_shows_loading() {
        let mut state = AdminState::new();
        state.mount();
        assert_eq!(state.display(), AdminDisplay::Loading);
    }

    #[test]
    fn loaded_bookings_render_as_table() {
        let (state, _) = loaded(vec![
            booking("1", BookingStatus::Pending),
            booking("2", BookingStatus::Verified),
        ]);
        match state.display() {
            AdminDisplay::Table(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn no_bookings_renders_empty_view() {
        let (state, _) = loaded(vec![]);
        assert_eq!(state.display(), AdminDisplay::Empty);
    }

    #[test]
    fn fetch_failure_renders_only_error() {
        let mut state = AdminState::new();
        let token = state.mount();
        assert!(state.apply_bookings(token, Err("Network error: refused".to_string())));
        assert_eq!(state.display(), AdminDisplay::Error(MSG_FETCH_BOOKINGS_FAILED));
    }

    #[test]
    fn status_update_touches_only_target() {
        let (mut state, token) = loaded(vec![
            booking("1", BookingStatus::Pending),
            booking("2", BookingStatus::Pending),
            booking("3", BookingStatus::Rejected),
        ]);
        let before = state.bookings.clone();

        let alert = state.apply_status_update(token, "2", BookingStatus::Verified, Ok(()));
        assert_eq!(alert, None);
        assert_eq!(state.bookings[0], before[0]);
        assert_eq!(state.bookings[2], before[2]);
        assert_eq!(state.bookings[1].status, BookingStatus::Verified);
        assert_eq!(
            Booking { status: BookingStatus::Pending, ..state.bookings[1].clone() },
            before[1]
        );
    }

    #[test]
    fn failed_status_update_leaves_state_unchanged() {
        let (mut state, token) = loaded(vec![booking("1", BookingStatus::Pending)]);
        let alert = state.apply_status_update(token, "1", BookingStatus::Rejected, Err("HTTP 404: Not Found".to_string()));
        assert_eq!(alert.as_deref(), Some("Failed to update status."));
        assert_eq!(state.bookings[0].status, BookingStatus::Pending);
    }

    #[test]
    fn late_results_after_unmount_are_ignored() {
        let mut state = AdminState::new();
        let token = state.mount();
        state.unmount();
        assert!(!state.apply_bookings(token, Ok(vec![booking("1", BookingStatus::Pending)])));
        assert!(state.bookings.is_empty());
        assert_eq!(state.apply_status_update(token, "1", BookingStatus::Verified, Ok(())), None);
    }

    #[test]
    fn document_viewer_shows_one_image_at_a_time() {
        let (mut state, _) = loaded(vec![
            booking("y", BookingStatus::Pending),
            booking("z", BookingStatus::Pending),
        ]);
        let y = state.bookings[0].document_url.clone();
        let z = state.bookings[1].document_url.clone();

        state.open_document(&y);
        assert_eq!(state.viewing_document.as_deref(), Some("https://docs/y.png"));

        state.open_document(&z);
        assert_eq!(state.viewing_document.as_deref(), Some("https://docs/z.png"));

        state.close_document();
        assert_eq!(state.viewing_document, None);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::models::wire::{lenient_list, null_as_default};

/// Tipo de reserva que elige el visitante
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum BookingType {
    Buy,
    Rent,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::Buy => "Buy",
            BookingType::Rent => "Rent",
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body de POST /api/users/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBookingRequest {
    pub phone: String,
    pub car_id: String,
    pub booking_type: BookingType,
}

/// Estado de verificación de una reserva (admin)
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Verified,
        BookingStatus::Rejected,
    ];

    /// Valor en el wire ("PENDING", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Verified => "VERIFIED",
            BookingStatus::Rejected => "REJECTED",
        }
    }

    /// Etiqueta del <select>
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Verified => "Verified",
            BookingStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Resumen del coche embebido en la reserva
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct BookingCar {
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
}

/// Reserva tal como la ve el admin
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub document_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: BookingStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub booking_type: String,
    #[serde(rename = "carId")]
    pub car: Option<BookingCar>,
}

impl Booking {
    pub fn car_brand(&self) -> &str {
        self.car
            .as_ref()
            .map(|c| c.brand.as_str())
            .filter(|b| !b.is_empty())
            .unwrap_or("-")
    }

    pub fn car_model(&self) -> &str {
        self.car
            .as_ref()
            .map(|c| c.model.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or("-")
    }

    pub fn document(&self) -> Option<&str> {
        Some(self.document_url.as_str()).filter(|url| !url.is_empty())
    }
}

/// Respuesta de GET /api/booking/allBookings
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct BookingsResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub bookings: Option<Vec<Booking>>,
}

impl BookingsResponse {
    pub fn into_bookings(self) -> Vec<Booking> {
        self.bookings.unwrap_or_default()
    }
}

/// Body de PUT /api/booking/{id}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UpdateStatusRequest {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_camel_case_keys() {
        let request = RegisterBookingRequest {
            phone: "+919876543210".to_string(),
            car_id: "c1".to_string(),
            booking_type: BookingType::Rent,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"phone": "+919876543210", "carId": "c1", "bookingType": "Rent"})
        );
    }

    #[test]
    fn decodes_admin_booking() {
        let json = r#"{
            "_id": "b1", "phone": "+15550001", "documentUrl": "https://img/dl.png",
            "status": "VERIFIED", "bookingType": "Buy",
            "carId": {"brand": "Honda", "model": "City"}
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Verified);
        assert_eq!(booking.car_brand(), "Honda");
        assert_eq!(booking.document(), Some("https://img/dl.png"));
    }

    #[test]
    fn missing_car_and_document_render_placeholders() {
        let booking: Booking = serde_json::from_str(r#"{"_id": "b2", "carId": null}"#).unwrap();
        assert_eq!(booking.car_brand(), "-");
        assert_eq!(booking.car_model(), "-");
        assert_eq!(booking.document(), None);
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn null_document_keeps_the_other_bookings() {
        let json = r#"{"bookings": [
            {"_id": "b1", "phone": "+15550001", "documentUrl": null, "status": "PENDING",
             "bookingType": "Rent", "carId": {"brand": "Honda", "model": "City"}},
            {"_id": "b2", "phone": null, "documentUrl": "https://img/dl2.png", "status": null,
             "bookingType": null, "carId": {"brand": null, "model": "Swift"}}
        ]}"#;
        let bookings = serde_json::from_str::<BookingsResponse>(json).unwrap().into_bookings();
        assert_eq!(bookings.len(), 2);

        assert_eq!(bookings[0].document(), None);
        assert_eq!(bookings[0].car_brand(), "Honda");

        assert_eq!(bookings[1].phone, "");
        assert_eq!(bookings[1].booking_type, "");
        assert_eq!(bookings[1].status, BookingStatus::Pending);
        assert_eq!(bookings[1].car_brand(), "-");
        assert_eq!(bookings[1].car_model(), "Swift");
        assert_eq!(bookings[1].document(), Some("https://img/dl2.png"));
    }

    #[test]
    fn malformed_booking_is_skipped() {
        let json = r#"{"bookings": [
            {"_id": "b1", "status": "ARCHIVED"},
            null,
            {"_id": "b3", "status": "REJECTED"}
        ]}"#;
        let bookings = serde_json::from_str::<BookingsResponse>(json).unwrap().into_bookings();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, "b3");
        assert_eq!(bookings[0].status, BookingStatus::Rejected);
    }

    #[test]
    fn status_update_body() {
        let body = UpdateStatusRequest { status: BookingStatus::Rejected };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"REJECTED"}"#);
        assert_eq!(BookingStatus::parse("VERIFIED"), Some(BookingStatus::Verified));
        assert_eq!(BookingStatus::parse("verified"), None);
    }
}

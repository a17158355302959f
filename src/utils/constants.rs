/// Rutas navegables
pub const CARS_PATH: &str = "/cars";
pub const ADMIN_PATH: &str = "/admin";

/// Endpoints del backend (relativos a CONFIG.backend_url())
pub const CARS_ENDPOINT: &str = "/api/cars/allcars";
pub const REGISTER_ENDPOINT: &str = "/api/users/register";
pub const BOOKINGS_ENDPOINT: &str = "/api/booking/allBookings";
pub const BOOKING_ENDPOINT: &str = "/api/booking";

pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Prefijos disponibles en el popup de reserva: (código, etiqueta)
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+91", "🇮🇳 +91"),
    ("+1", "🇺🇸 +1"),
    ("+44", "🇬🇧 +44"),
    ("+61", "🇦🇺 +61"),
    ("+81", "🇯🇵 +81"),
    ("+971", "🇦🇪 +971"),
];

// Mensajes visibles para el usuario
pub const MSG_BOOKING_REGISTERED: &str = "User registered successfully!";
pub const MSG_FETCH_BOOKINGS_FAILED: &str = "Failed to fetch bookings. Make sure your backend is running.";
pub const MSG_UPDATE_STATUS_FAILED: &str = "Failed to update status.";

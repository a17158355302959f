pub mod car;
pub mod booking;
mod wire;

pub use car::{Car, CarsResponse};
pub use booking::{
    Booking, BookingCar, BookingStatus, BookingType, BookingsResponse, RegisterBookingRequest,
    UpdateStatusRequest,
};

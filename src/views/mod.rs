pub mod app;
pub mod nav;
pub mod car_list;
pub mod booking_popup;
pub mod admin_dashboard;
pub mod document_viewer;

pub use app::render_app;
pub use nav::render_nav;
pub use car_list::render_car_list;
pub use booking_popup::render_booking_popup;
pub use admin_dashboard::render_admin_dashboard;
pub use document_viewer::render_document_viewer;

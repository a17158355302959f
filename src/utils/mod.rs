// Utils compartidos

pub mod constants;
pub mod dialog;

pub use constants::*;
pub use dialog::alert;

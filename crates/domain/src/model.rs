pub mod appointment;
pub mod customer;
pub mod field;
pub mod joined_row;

pub use appointment::AppointmentRecord;
pub use customer::CustomerRecord;
pub use field::{FieldValue, RowField};
pub use joined_row::JoinedRow;

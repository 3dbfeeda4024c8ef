// crates/shared-kernel/src/value_objects/mod.rs
pub mod amount;
pub mod customer_id;
pub mod scalar;

pub use amount::Amount;
pub use customer_id::CustomerId;
pub use scalar::ScalarValue;

pub mod order_status;
pub mod payment_method;
pub mod urgency;

pub use order_status::OrderStatus;
pub use payment_method::PaymentMethod;
pub use urgency::Urgency;

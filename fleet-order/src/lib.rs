pub mod status;
pub mod tracker;
pub mod order;
pub mod checkout;
pub mod manager;

pub use status::OrderStatus;
pub use tracker::{OrderTracker, Stage, StageAnnotations, StageState, StageView, TrackerError};
pub use order::Order;
pub use checkout::{AddressKind, CardDetails, CheckoutError, DeliveryAddress, PaymentMethod};
pub use manager::{OrderError, OrderManager};

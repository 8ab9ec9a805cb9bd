pub mod category;
pub mod coupon;
pub mod news;
pub mod platform;
pub mod registration;

pub use category::{CatalogMeta, CategoryPriceEntry, PriceTable};
pub use coupon::Coupon;
pub use news::News;
pub use platform::{EventPaymentConfig, PlatformConfig, commission_mode};
pub use registration::{Registration, payment_status};

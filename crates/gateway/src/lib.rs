pub mod error;
pub mod mailer;
pub mod mercadopago;
pub mod templates;

pub use error::{GatewayError, Result};
pub use mailer::ResendMailer;
pub use mercadopago::{
    BackUrls, MercadoPagoClient, PaymentInfo, PreferenceItem, PreferencePayer, PreferenceRequest,
    PreferenceResponse,
};

pub mod payment;

pub use payment::PaymentApiClient;

pub mod callback;
pub mod payment;
pub mod response;

pub use callback::*;
pub use payment::*;
pub use response::*;

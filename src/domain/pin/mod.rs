pub mod error;
pub mod model;
pub mod service;

pub use error::PinServiceError;
pub use model::Pin;
pub use service::{PinService, PinServiceApi};

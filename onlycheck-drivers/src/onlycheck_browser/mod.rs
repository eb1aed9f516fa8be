pub mod driver;
pub mod page;
pub mod wait;

pub use driver::{OnlycheckDriver, SessionConfig};
pub use page::{OnlycheckElement, OnlycheckPage};
pub use wait::WaitSpec;

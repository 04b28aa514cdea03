pub mod error;
pub mod outcome;
pub mod response;
pub mod rsc;

pub use error::{NETWORK_ERROR_MSG, TransportError};
pub use outcome::{DispatchOutcome, FailureKind};
pub use response::Response;
pub use rsc::reason_phrase;

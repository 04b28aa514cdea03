pub mod client;
pub mod handler;
pub mod types;

pub use client::{BusinessHook, Client, ClientOptions, HttpHook, Validator, create_client};
pub use handler::{DispatchCallbacks, dispatch, extract_payload};
pub use types::{
    DispatchOutcome, FailureKind, NETWORK_ERROR_MSG, Response, TransportError, reason_phrase,
};

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{RawChatOutcome, YelpClient};
pub use error::YelpError;
pub use normalize::places_from_response;
pub use types::{ChatRequest, ChatResponse, Entity, UserContext};

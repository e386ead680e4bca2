pub mod insight;
pub mod reply;
pub mod state;
pub mod suggest;

pub use insight::{category_insight, urgency_insight};
pub use reply::contextual_reply;
pub use state::{ChatMessage, ChatState, Role, SearchSession, SessionError};
pub use suggest::suggested_questions;

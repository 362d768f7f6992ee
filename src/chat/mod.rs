mod conversation;
mod session;

pub use conversation::{Conversation, Role, Turn};
pub use session::{AnthropicBackend, CompletionBackend, Session, SubmitError, APOLOGY_MESSAGE};

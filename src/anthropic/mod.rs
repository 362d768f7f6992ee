mod core;

pub use core::{complete, CompletionError, ANTHROPIC_VERSION, DEFAULT_MODEL, MAX_TOKENS};

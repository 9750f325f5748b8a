pub mod interactions;
pub mod prompts;

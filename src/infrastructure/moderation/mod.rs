pub mod classifier;
pub mod gemini_client;
pub mod prompt;

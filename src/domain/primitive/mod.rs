pub mod command_name;
pub mod pacing;
pub mod prompt_identity;

pub use command_name::{CLEAR_COMMAND, CommandName};
pub use pacing::Pacer;
pub use prompt_identity::PromptIdentity;

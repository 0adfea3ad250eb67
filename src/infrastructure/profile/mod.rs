pub mod builtin_profile;
pub mod json_profile_adapter;

pub use builtin_profile::BuiltinProfileAdapter;
pub use json_profile_adapter::JsonProfileAdapter;

use std::path::PathBuf;

use crate::infrastructure::profile::{BuiltinProfileAdapter, JsonProfileAdapter};

/// Creates the compiled-in ProfilePort implementation.
pub fn create_builtin_profile_adapter() -> BuiltinProfileAdapter {
    BuiltinProfileAdapter
}

/// Creates a ProfilePort implementation backed by a JSON file.
pub fn create_json_profile_adapter(path: PathBuf) -> JsonProfileAdapter {
    JsonProfileAdapter::new(path)
}

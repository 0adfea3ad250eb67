use crate::domain::model::Profile;
use crate::shared::error::AppError;

/// Profile source port.
///
/// Defines the boundary between usecase and infrastructure for persona data.
/// Concrete implementations (built-in data, JSON file) live in infrastructure.
pub trait ProfilePort {
    /// Load the profile. Implementations return it unvalidated; callers
    /// run `Profile::validate` before use.
    fn load(&self) -> Result<Profile, AppError>;
}

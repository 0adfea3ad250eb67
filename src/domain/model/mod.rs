pub mod boot_sequence;
pub mod command_registry;
pub mod matrix_rain;
pub mod profile;
pub mod profile_card;
pub mod reveal;
pub mod scrollback;
pub mod splitter;

pub use boot_sequence::BootSequence;
pub use command_registry::CommandRegistry;
pub use matrix_rain::{MatrixRain, RainCell};
pub use profile::{Command, NavItem, Profile};
pub use profile_card::ProfileCard;
pub use reveal::Reveal;
pub use scrollback::{Entry, ScrollbackLog};
pub use splitter::Splitter;

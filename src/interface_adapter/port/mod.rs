pub mod profile_port;

pub use profile_port::ProfilePort;

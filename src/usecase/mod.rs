pub mod session_usecase;

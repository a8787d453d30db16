pub mod file_presenter;
pub mod session_presenter;

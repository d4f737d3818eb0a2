//! Input handling
//! Resume file loading and the local resume store

pub mod file_detector;
pub mod manager;
pub mod store;

pub use manager::InputManager;
pub use store::ResumeStore;

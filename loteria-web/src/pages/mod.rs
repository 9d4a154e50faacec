//! Page modules

pub mod home;

pub use home::HomePage;

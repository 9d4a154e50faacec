//! UI Components

pub mod connect_button;
pub mod footer;
pub mod header;

pub use connect_button::ConnectButton;
pub use footer::Footer;
pub use header::Header;

pub mod client;

pub use client::{Category, WpClient, WpError};

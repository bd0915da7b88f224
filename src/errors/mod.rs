pub mod demo_error;

pub use demo_error::DemoError;

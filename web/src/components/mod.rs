pub mod error;

pub use error::ErrorView;

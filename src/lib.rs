pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod notes;
pub mod render;
pub mod storage;

mod types;

pub use config::Config;
pub use controller::{Controller, Export, Screen, Session, View};
pub use error::{AppError, RenderError, Result, StorageError};
pub use types::*;

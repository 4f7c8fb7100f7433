#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, Settings};
pub use core::dataset::Dataset;
pub use core::facts::{dinosaur_description, dinosaurs_alive_mya, longest_dinosaur};
pub use domain::model::{DinosaurRecord, Mya};
pub use domain::ports::{ConfigProvider, Storage};
pub use utils::error::{FactsError, Result};

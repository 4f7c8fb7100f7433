pub mod dataset;
pub mod facts;
pub mod report;

pub use crate::domain::model::{DinosaurRecord, Mya};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;

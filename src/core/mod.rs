pub mod distance;
pub mod engine;
pub mod history;
pub mod parser;
pub mod pipeline;
pub mod validator;

pub use crate::domain::model::{Analysis, RawInput, RecentFile};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, Pipeline, Storage};
pub use crate::utils::error::Result;

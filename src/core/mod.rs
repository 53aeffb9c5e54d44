pub mod writer;

pub use crate::domain::model::{VerifyOutcome, WritePlan, WriteReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;

pub mod aggregate;
pub mod chunk;
pub mod etl;
pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod process;
pub mod summary;

pub use crate::domain::model::{FlightRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Fetcher, Pipeline, Storage};
pub use crate::utils::error::Result;

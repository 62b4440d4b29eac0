pub mod batch;
pub mod pool;

pub use batch::batch_ranges;
pub use pool::{PoolError, PoolHandle, WorkerPool};

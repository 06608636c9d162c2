pub mod collector;
pub mod process;
pub mod rank;
pub mod sampler;
pub mod snapshot;

//! Platform side of the client: persistent storage and process-level utilities.

pub mod storage;
pub mod utils;

pub mod error;
pub mod helpers;
pub mod objkt;
pub mod storage;

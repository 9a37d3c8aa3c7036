pub mod plot;
pub mod storage;

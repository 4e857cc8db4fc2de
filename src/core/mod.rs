pub mod atlas;
pub mod cards;
pub mod logging;
pub mod storage;

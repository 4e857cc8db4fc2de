pub mod atlas;
pub mod collection;

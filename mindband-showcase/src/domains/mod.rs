pub mod carousel;
pub mod chrome;
pub mod features;

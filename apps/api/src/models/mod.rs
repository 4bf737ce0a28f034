pub mod carousel;
pub mod preset;
pub mod signature;
pub mod slide;

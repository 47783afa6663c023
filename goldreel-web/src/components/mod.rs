pub mod modal;
pub mod reel;

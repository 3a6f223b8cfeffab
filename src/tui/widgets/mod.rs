pub mod banner;
pub mod clock;
pub mod progress;

pub mod banner;
pub mod printer;
pub mod progress;

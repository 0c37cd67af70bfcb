pub mod browser;
pub mod html;

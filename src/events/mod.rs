pub mod keyboard;
pub mod touch;

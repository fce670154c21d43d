pub mod greeting;
pub mod utils;

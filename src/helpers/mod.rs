pub mod numbers;
pub mod time;

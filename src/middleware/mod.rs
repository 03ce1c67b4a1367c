pub mod extract;
pub mod limit;

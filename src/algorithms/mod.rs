pub mod shift;
pub mod unicode;

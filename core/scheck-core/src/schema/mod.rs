pub mod compile;
pub mod load;

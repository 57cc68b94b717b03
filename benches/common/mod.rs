pub mod cutting;
pub mod samples;

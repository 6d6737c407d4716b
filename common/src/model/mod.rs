pub mod data_pool;
pub mod data_type;

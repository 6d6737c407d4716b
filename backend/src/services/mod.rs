pub mod data_pools;
pub mod data_types;

pub mod data_pools;

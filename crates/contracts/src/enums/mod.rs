pub mod sort_key;

pub mod data_type;
pub mod operator;
pub mod value;

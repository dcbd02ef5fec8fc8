pub mod attribute;
pub mod data_type;
pub mod date_format;
pub mod schema;
pub mod value;

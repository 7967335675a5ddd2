pub mod entity;
pub mod errors;
pub mod field;
pub mod normalizers;
pub mod sink;
pub mod value_objects;
pub mod whitespace;

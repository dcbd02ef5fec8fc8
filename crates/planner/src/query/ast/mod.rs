pub mod node;
pub mod shape;

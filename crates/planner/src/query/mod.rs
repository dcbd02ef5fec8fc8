pub mod ast;
pub mod dialect;
pub mod macros;
pub mod renderer;

pub mod expr;
pub mod filter;
pub mod kind;
pub mod literal;
pub mod operator;
pub mod path;
pub mod temporal;

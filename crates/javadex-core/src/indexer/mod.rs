pub mod annotations;
pub mod ast;
pub mod filesystem;
pub mod javadoc;
pub mod parser;
pub mod pipeline;
pub mod symbols;

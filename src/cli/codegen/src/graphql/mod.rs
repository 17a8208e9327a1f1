/* src/cli/codegen/src/graphql/mod.rs */

mod generator;
mod render;


pub use generator::{GeneratedSchema, generate_schema};

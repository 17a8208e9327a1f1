/* src/cli/codegen/src/lib.rs */

mod graphql;

pub mod fingerprint;
pub mod naming;

pub use fingerprint::{blueprint_fingerprint, embedded_fingerprint};
pub use graphql::{GeneratedSchema, generate_schema};
pub use naming::{RESERVED_TYPE_NAMES, capitalize, is_reserved_name, lower_first, pluralize};

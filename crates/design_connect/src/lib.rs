//! Design-tool mapping declarations for the `design_system` components.
//!
//! Each [`ConnectMapping`] ties a component to its node in the design file,
//! binds component props to design properties, and carries a view snippet that
//! tooling fills in for a concrete design instance. Mappings are plain data:
//! they are validated against the component [`contracts`], resolved against
//! design instances, and exported by `xtask`. The running application never
//! reads them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
pub mod contract;
mod error;
pub mod model;
mod resolve;
mod validate;

pub use catalog::{catalog, mapping_for};
pub use contract::{contract_for, contracts, ComponentContract, PropContract, PropKind};
pub use error::{ConnectError, ConnectResult};
pub use model::{
    BooleanMapping, ConnectMapping, EnumOption, PropBinding, PropMapping, PropValue,
    TEMPLATE_NODE_URL,
};
pub use resolve::{
    render_example, resolve, ConnectConfig, DesignInstance, DesignValue, ResolvedProps,
};
pub use validate::{problems, validate, validate_all};

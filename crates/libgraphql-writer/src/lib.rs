//! Build GraphQL request documents in memory and render them to the exact
//! GraphQL text a server expects.
//!
//! Nodes are assembled bottom-up (leaf [`Field`]s first, then the fields,
//! fragments and [`Operation`]s that contain them) through validating
//! builders, so a tree that violates GraphQL's structural rules can never
//! exist. Rendering a built tree is then a pure, infallible function:
//!
//! ```
//! use libgraphql_writer::Field;
//! use libgraphql_writer::Operation;
//! use libgraphql_writer::selection_set_of;
//!
//! let user = Field::builder("user")
//!     .add_argument("id", 12)
//!     .add_selections(["firstName", "lastName"])
//!     .build()
//!     .unwrap();
//! let query = Operation::query("findUser", selection_set_of([user])).unwrap();
//! assert_eq!(
//!     query.to_graphql(),
//!     "query findUser { user(id: 12) { firstName lastName } }",
//! );
//! ```
//!
//! This crate never parses GraphQL text and never talks to a network; see
//! [`GraphQLRequest`] for the JSON payload to hand to an HTTP client.

mod arguments;
mod definition;
mod directive;
mod document;
mod field;
mod field_builder;
mod fragment;
mod fragment_builder;
mod graphql_build_error;
mod graphql_request;
mod inline_fragment;
mod inline_fragment_builder;
mod input_value_type;
mod operation;
mod operation_builder;
mod operation_kind;
mod render;
mod render_graphql;
mod selection_set;
mod value;

pub use arguments::arguments_of;
pub use arguments::Arguments;
pub use definition::Definition;
pub use directive::Directive;
pub use document::Document;
pub use field::Field;
pub use field_builder::FieldBuilder;
pub use fragment::Fragment;
pub use fragment_builder::FragmentBuilder;
pub use graphql_build_error::GraphQLBuildError;
pub use graphql_build_error::StructuralViolation;
pub use graphql_request::GraphQLRequest;
pub use inline_fragment::InlineFragment;
pub use inline_fragment_builder::InlineFragmentBuilder;
pub use input_value_type::InputValueKind;
pub use input_value_type::InputValueType;
pub use operation::Operation;
pub use operation_builder::OperationBuilder;
pub use operation_kind::OperationKind;
pub use render_graphql::RenderGraphQL;
pub use selection_set::selection_set_of;
pub use selection_set::SelectionSet;
pub use value::Value;

#[cfg(test)]
mod tests;

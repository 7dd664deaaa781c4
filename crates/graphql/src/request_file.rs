//! The JSON request description format read by `graphql render`.
//!
//! A request file lists top-level definitions and, optionally, the variable
//! values to send alongside them:
//!
//! ```json
//! {
//!   "definitions": [
//!     {"operation": {
//!       "kind": "query",
//!       "name": "getUser",
//!       "variables": {"$id": "String!"},
//!       "selection_set": [
//!         {"name": "user", "arguments": {"id": "$id"}, "selection_set": ["name"]}
//!       ]
//!     }}
//!   ],
//!   "variables": {"id": "559645cd"}
//! }
//! ```
//!
//! Descriptions are converted through the library's builders, so every
//! structural rule is enforced exactly as it is for hand-built trees.

use indexmap::IndexMap;
use libgraphql_writer::Definition;
use libgraphql_writer::Directive;
use libgraphql_writer::Field;
use libgraphql_writer::Fragment;
use libgraphql_writer::GraphQLBuildError;
use libgraphql_writer::InlineFragment;
use libgraphql_writer::InputValueType;
use libgraphql_writer::Operation;
use libgraphql_writer::OperationKind;
use libgraphql_writer::Value;
use serde::Deserialize;

type Result<T> = std::result::Result<T, GraphQLBuildError>;
type JsonArguments = IndexMap<String, serde_json::Value>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RequestFile {
    pub definitions: Vec<DefinitionDescription>,
    #[serde(default)]
    pub variables: Option<serde_json::Map<String, serde_json::Value>>,
}
impl RequestFile {
    pub(crate) fn into_definitions(self) -> Result<Vec<Definition>> {
        self.definitions
            .into_iter()
            .map(DefinitionDescription::into_definition)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DefinitionDescription {
    Field(FieldDescription),
    Fragment(FragmentDescription),
    Operation(OperationDescription),
}
impl DefinitionDescription {
    fn into_definition(self) -> Result<Definition> {
        Ok(match self {
            Self::Field(desc) => Definition::Field(desc.into_field()?),
            Self::Fragment(desc) => Definition::Fragment(desc.into_fragment()?),
            Self::Operation(desc) => Definition::Operation(desc.into_operation()?),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DirectiveDescription {
    name: String,
    #[serde(default)]
    arguments: JsonArguments,
}
impl DirectiveDescription {
    fn into_directive(self) -> Result<Directive> {
        Directive::with_arguments(self.name, convert_arguments(self.arguments)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FieldDescription {
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    arguments: JsonArguments,
    #[serde(default)]
    inline_fragments: Vec<InlineFragmentDescription>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    selection_set: Vec<SelectionDescription>,
}
impl FieldDescription {
    fn into_field(self) -> Result<Field> {
        let mut builder =
            Field::builder(self.name)
                .add_arguments(convert_arguments(self.arguments)?)
                .add_selections(convert_selection_set(self.selection_set)?);
        if let Some(alias) = self.alias {
            builder = builder.set_alias(alias);
        }
        for inline_fragment in self.inline_fragments {
            builder = builder.add_inline_fragment(
                inline_fragment.into_inline_fragment()?,
            );
        }
        builder.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FragmentDescription {
    #[serde(default)]
    directive: Option<DirectiveDescription>,
    name: String,
    selection_set: Vec<SelectionDescription>,
    type_condition: String,
}
impl FragmentDescription {
    fn into_fragment(self) -> Result<Fragment> {
        let mut builder =
            Fragment::builder(self.name, self.type_condition)
                .add_selections(convert_selection_set(self.selection_set)?);
        if let Some(directive) = self.directive {
            builder = builder.set_directive(directive.into_directive()?);
        }
        builder.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct InlineFragmentDescription {
    #[serde(default)]
    directive: Option<DirectiveDescription>,
    selection_set: Vec<SelectionDescription>,
    #[serde(default)]
    type_condition: Option<String>,
}
impl InlineFragmentDescription {
    fn into_inline_fragment(self) -> Result<InlineFragment> {
        let mut builder =
            InlineFragment::builder()
                .add_selections(convert_selection_set(self.selection_set)?);
        if let Some(type_condition) = self.type_condition {
            builder = builder.set_type_condition(type_condition);
        }
        if let Some(directive) = self.directive {
            builder = builder.set_directive(directive.into_directive()?);
        }
        builder.build()
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum OperationKindDescription {
    Mutation,
    Query,
}
impl From<OperationKindDescription> for OperationKind {
    fn from(value: OperationKindDescription) -> Self {
        match value {
            OperationKindDescription::Mutation => OperationKind::Mutation,
            OperationKindDescription::Query => OperationKind::Query,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct OperationDescription {
    kind: OperationKindDescription,
    #[serde(default)]
    name: String,
    selection_set: Vec<SelectionDescription>,
    /// Variable name → type name (e.g. `"$id": "String!"`).
    #[serde(default)]
    variables: IndexMap<String, String>,
}
impl OperationDescription {
    fn into_operation(self) -> Result<Operation> {
        let mut builder =
            Operation::builder(self.kind.into())
                .set_name(self.name)
                .add_selections(convert_selection_set(self.selection_set)?);
        for (name, type_name) in self.variables {
            let input_type: InputValueType =
                type_name.parse().map_err(|err| match err {
                    GraphQLBuildError::UnsupportedValueKind { found, .. } => {
                        GraphQLBuildError::UnsupportedValueKind {
                            argument_path: name.to_owned(),
                            found,
                        }
                    },
                    other => other,
                })?;
            builder = builder.add_variable(name, input_type);
        }
        builder.build()
    }
}

/// A selection is either a bare field name or a full field description.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SelectionDescription {
    Name(String),
    Field(FieldDescription),
}

fn convert_arguments(
    arguments: JsonArguments,
) -> Result<libgraphql_writer::Arguments> {
    arguments.into_iter()
        .map(|(name, json)| {
            let value = Value::from_json_argument(&name, json)?;
            Ok((name, value))
        })
        .collect()
}

fn convert_selection_set(
    selections: Vec<SelectionDescription>,
) -> Result<Vec<Field>> {
    selections.into_iter()
        .map(|selection| match selection {
            SelectionDescription::Name(name) => Ok(Field::from_name(name)),
            SelectionDescription::Field(desc) => desc.into_field(),
        })
        .collect()
}

use crate::render::append_spaced_selection_set;
use crate::render::append_variable_definitions;
use crate::Arguments;
use crate::Field;
use crate::GraphQLBuildError;
use crate::OperationBuilder;
use crate::OperationKind;
use crate::RenderGraphQL;
use crate::SelectionSet;
use inherent::inherent;

/// A top-level GraphQL request unit: a query or a mutation, with an optional
/// name, variable declarations, and the root fields it selects.
///
/// An operation with an empty name renders in the anonymous form
/// (`query { … }`).
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) variables: Arguments,
}
impl Operation {
    pub fn builder(kind: OperationKind) -> OperationBuilder {
        OperationBuilder::new(kind)
    }

    /// A query without variable declarations.
    pub fn query(
        name: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Result<Self, GraphQLBuildError> {
        OperationBuilder::new(OperationKind::Query)
            .set_name(name)
            .add_selections(selection_set)
            .build()
    }

    /// A mutation without variable declarations.
    pub fn mutation(
        name: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Result<Self, GraphQLBuildError> {
        OperationBuilder::new(OperationKind::Mutation)
            .set_name(name)
            .add_selections(selection_set)
            .build()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &[Field] {
        self.selection_set.as_slice()
    }

    /// Variable name (including its leading `$`) → type placeholder.
    pub fn variables(&self) -> &Arguments {
        &self.variables
    }
}

#[inherent]
impl RenderGraphQL for Operation {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(self.kind.keyword());
        if !self.name.is_empty() {
            sink.push(' ');
            sink.push_str(&self.name);
        }
        append_variable_definitions(&self.variables, sink);
        append_spaced_selection_set(&self.selection_set, &[], sink);
    }

    pub fn to_graphql(&self) -> String;
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

use crate::render::append_spaced_selection_set;
use crate::Directive;
use crate::Field;
use crate::GraphQLBuildError;
use crate::InlineFragmentBuilder;
use crate::RenderGraphQL;
use crate::SelectionSet;
use inherent::inherent;

/// A selection set applied conditionally, embedded directly in a field's
/// selection (e.g. `... on User { name }` or
/// `... @include(if: $withFriends) { friends }`).
///
/// Inline fragments always carry a type condition, a directive, or both.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(crate) directive: Option<Directive>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragment {
    pub fn builder() -> InlineFragmentBuilder {
        InlineFragmentBuilder::new()
    }

    /// An inline fragment applied when the runtime type is `type_condition`.
    pub fn on(
        type_condition: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Result<Self, GraphQLBuildError> {
        InlineFragmentBuilder::new()
            .set_type_condition(type_condition)
            .add_selections(selection_set)
            .build()
    }

    /// An inline fragment applying `directive` to a group of fields in the
    /// same type as the enclosing context.
    pub fn with_directive(
        directive: Directive,
        selection_set: SelectionSet,
    ) -> Result<Self, GraphQLBuildError> {
        InlineFragmentBuilder::new()
            .set_directive(directive)
            .add_selections(selection_set)
            .build()
    }

    pub fn directive(&self) -> Option<&Directive> {
        self.directive.as_ref()
    }

    pub fn selection_set(&self) -> &[Field] {
        self.selection_set.as_slice()
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}

#[inherent]
impl RenderGraphQL for InlineFragment {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            sink.push_str(" on ");
            sink.push_str(type_condition);
        }
        if let Some(directive) = &self.directive {
            sink.push(' ');
            directive.append_graphql(sink);
        }
        append_spaced_selection_set(&self.selection_set, &[], sink);
    }

    pub fn to_graphql(&self) -> String;
}

impl std::fmt::Display for InlineFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

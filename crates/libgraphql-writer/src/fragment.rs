use crate::render::append_spaced_selection_set;
use crate::Directive;
use crate::Field;
use crate::FragmentBuilder;
use crate::GraphQLBuildError;
use crate::RenderGraphQL;
use crate::SelectionSet;
use inherent::inherent;

/// A named, reusable fragment definition bound to a type condition (e.g.
/// `fragment UserFields on User { id name }`).
///
/// Use [`Field::fragment_spread`] to spread it into a selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(crate) directive: Option<Directive>,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: String,
}
impl Fragment {
    pub fn builder(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> FragmentBuilder {
        FragmentBuilder::new(name, type_condition)
    }

    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Result<Self, GraphQLBuildError> {
        FragmentBuilder::new(name, type_condition)
            .add_selections(selection_set)
            .build()
    }

    pub fn directive(&self) -> Option<&Directive> {
        self.directive.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &[Field] {
        self.selection_set.as_slice()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

#[inherent]
impl RenderGraphQL for Fragment {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str("fragment ");
        sink.push_str(&self.name);
        sink.push_str(" on ");
        sink.push_str(&self.type_condition);
        if let Some(directive) = &self.directive {
            sink.push(' ');
            directive.append_graphql(sink);
        }
        append_spaced_selection_set(&self.selection_set, &[], sink);
    }

    pub fn to_graphql(&self) -> String;
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

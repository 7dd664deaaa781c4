use crate::arguments::validate_arguments;
use crate::render::append_arguments;
use crate::Arguments;
use crate::GraphQLBuildError;
use crate::RenderGraphQL;
use inherent::inherent;

/// A directive annotation such as `@include(if: $withFriends)`.
///
/// Directives describe alternate runtime execution behavior for the
/// fragment they annotate.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) arguments: Arguments,
    pub(crate) name: String,
}
impl Directive {
    /// A directive without arguments (e.g. `@skip`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: Arguments::new(),
            name: name.into(),
        }
    }

    /// A directive with arguments. Fails when an argument value has no
    /// literal form.
    pub fn with_arguments(
        name: impl Into<String>,
        arguments: Arguments,
    ) -> Result<Self, GraphQLBuildError> {
        validate_arguments(&arguments)?;
        Ok(Self {
            arguments,
            name: name.into(),
        })
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[inherent]
impl RenderGraphQL for Directive {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push('@');
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
    }

    pub fn to_graphql(&self) -> String;
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

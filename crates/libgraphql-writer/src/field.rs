use crate::render::append_arguments;
use crate::render::append_selection_set;
use crate::render::append_spaced_selection_set;
use crate::selection_set::validate_selection_set;
use crate::Arguments;
use crate::FieldBuilder;
use crate::Fragment;
use crate::GraphQLBuildError;
use crate::InlineFragment;
use crate::Operation;
use crate::RenderGraphQL;
use crate::SelectionSet;
use inherent::inherent;

/// A field selection: optionally aliased, optionally parameterized by
/// arguments, and optionally nested via its own selection set and inline
/// fragments.
///
/// A field with an empty name is a *root* field. Root fields only exist to
/// wrap a top-level selection set (e.g. as a [`Document`](crate::Document)
/// definition) and can never be nested in another selection set.
///
/// Two fields are equal when their rendered GraphQL text is equal.
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Arguments,
    pub(crate) inline_fragments: Vec<InlineFragment>,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
}
impl Field {
    /// Start building a field named `name`.
    pub fn builder(name: impl Into<String>) -> FieldBuilder {
        FieldBuilder::new(name)
    }

    /// A leaf field with no alias, arguments, or selections.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: Arguments::new(),
            inline_fragments: vec![],
            name: name.into(),
            selection_set: vec![],
        }
    }

    /// A root field wrapping `selection_set`, for use as a top-level
    /// selection (e.g. `{ user { name } }`).
    pub fn root(selection_set: SelectionSet) -> Result<Self, GraphQLBuildError> {
        validate_selection_set(&selection_set, || "a root field".to_string())?;
        Ok(Self {
            selection_set,
            ..Self::from_name("")
        })
    }

    /// Select an operation's root fields as a (possibly aliased) field named
    /// after the operation.
    ///
    /// The operation's variable declarations are not carried over: they
    /// declare types, not argument values. An anonymous operation yields a
    /// root field, which takes no alias.
    pub fn from_operation(operation: &Operation, alias: Option<&str>) -> Self {
        Self {
            alias: alias
                .filter(|_| !operation.name().is_empty())
                .map(str::to_string),
            selection_set: operation.selection_set().to_vec(),
            ..Self::from_name(operation.name())
        }
    }

    /// A selection that spreads the named `fragment` into the enclosing
    /// selection set. Renders as `...FragmentName`.
    pub fn fragment_spread(fragment: &Fragment) -> Self {
        Self::from_name(format!("...{}", fragment.name()))
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn inline_fragments(&self) -> &[InlineFragment] {
        self.inline_fragments.as_slice()
    }

    /// Whether this is a root (unnamed) field.
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this field, return the alias.
    /// Otherwise return the name of the field.
    pub fn selected_name(&self) -> &str {
        self.alias()
            .filter(|alias| !alias.is_empty())
            .unwrap_or_else(|| self.name())
    }

    pub fn selection_set(&self) -> &[Field] {
        self.selection_set.as_slice()
    }
}

#[inherent]
impl RenderGraphQL for Field {
    pub fn append_graphql(&self, sink: &mut String) {
        // A root field renders as just its selection set.
        if self.is_root() {
            append_selection_set(&self.selection_set, &self.inline_fragments, sink);
            return;
        }

        if let Some(alias) = self.alias.as_deref().filter(|a| !a.is_empty()) {
            sink.push_str(alias);
            sink.push_str(": ");
        }
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
        append_spaced_selection_set(
            &self.selection_set,
            &self.inline_fragments,
            sink,
        );
    }

    pub fn to_graphql(&self) -> String;
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

impl std::cmp::PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.to_graphql() == other.to_graphql()
    }
}
impl std::cmp::Eq for Field {}

impl std::hash::Hash for Field {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.to_graphql(), state)
    }
}

impl std::convert::From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
impl std::convert::From<String> for Field {
    fn from(name: String) -> Self {
        Self::from_name(name)
    }
}

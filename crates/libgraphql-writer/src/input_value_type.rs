use crate::GraphQLBuildError;
use crate::RenderGraphQL;
use inherent::inherent;

/// The seven input kinds an operation variable can be declared with.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputValueKind {
    Boolean,
    Enum,
    Float,
    Int,
    List,
    Object,
    String,
}
impl InputValueKind {
    /// The GraphQL type name this kind is declared with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Enum => "Enum",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::List => "List",
            Self::Object => "Object",
            Self::String => "String",
        }
    }
}

/// A typed placeholder used when declaring an operation's variables (e.g. the
/// `String!` in `query q($id: String!)`).
///
/// An `InputValueType` is never a selected value; it only ever appears in
/// the variable declarations of an [`Operation`](crate::Operation).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct InputValueType {
    pub(crate) kind: InputValueKind,
    pub(crate) required: bool,
}
impl InputValueType {
    pub fn new(kind: InputValueKind, required: bool) -> Self {
        Self { kind, required }
    }

    /// Shorthand for a non-null (`Kind!`) placeholder.
    pub fn required(kind: InputValueKind) -> Self {
        Self::new(kind, true)
    }

    /// Shorthand for a nullable (`Kind`) placeholder.
    pub fn optional(kind: InputValueKind) -> Self {
        Self::new(kind, false)
    }

    pub fn kind(&self) -> InputValueKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

#[inherent]
impl RenderGraphQL for InputValueType {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(self.kind.type_name());
        if self.required {
            sink.push('!');
        }
    }

    pub fn to_graphql(&self) -> String;
}

impl std::fmt::Display for InputValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

impl std::str::FromStr for InputValueType {
    type Err = GraphQLBuildError;

    /// Read a type name such as `Int` or `String!`.
    fn from_str(type_name: &str) -> Result<Self, Self::Err> {
        let type_name = type_name.trim();
        let (kind_name, required) = match type_name.strip_suffix('!') {
            Some(kind_name) => (kind_name, true),
            None => (type_name, false),
        };
        let kind = match kind_name {
            "Boolean" => InputValueKind::Boolean,
            "Enum" => InputValueKind::Enum,
            "Float" => InputValueKind::Float,
            "Int" => InputValueKind::Int,
            "List" => InputValueKind::List,
            "Object" => InputValueKind::Object,
            "String" => InputValueKind::String,
            _ => return Err(GraphQLBuildError::UnsupportedValueKind {
                argument_path: String::new(),
                found: format!("the unknown variable type `{type_name}`"),
            }),
        };
        Ok(Self::new(kind, required))
    }
}

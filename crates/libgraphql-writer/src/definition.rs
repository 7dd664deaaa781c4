use crate::Field;
use crate::Fragment;
use crate::Operation;
use crate::RenderGraphQL;
use inherent::inherent;

/// Anything that can stand at the top level of a [`Document`](crate::Document).
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    /// A selection in GraphQL's shorthand query form (usually a root field
    /// or a bare top-level field).
    Field(Field),
    Fragment(Fragment),
    Operation(Operation),
}
impl Definition {
    /// The operation name to send alongside this definition in a request
    /// payload, if it has one.
    pub fn operation_name(&self) -> Option<&str> {
        match self {
            Self::Operation(op) if !op.name().is_empty() => Some(op.name()),
            Self::Field(_) | Self::Fragment(_) | Self::Operation(_) => None,
        }
    }
}

#[inherent]
impl RenderGraphQL for Definition {
    pub fn append_graphql(&self, sink: &mut String) {
        match self {
            Self::Field(field) => field.append_graphql(sink),
            Self::Fragment(fragment) => fragment.append_graphql(sink),
            Self::Operation(operation) => operation.append_graphql(sink),
        }
    }

    pub fn to_graphql(&self) -> String;
}

impl std::fmt::Display for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

impl std::convert::From<Field> for Definition {
    fn from(value: Field) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<Fragment> for Definition {
    fn from(value: Fragment) -> Self {
        Self::Fragment(value)
    }
}
impl std::convert::From<Operation> for Definition {
    fn from(value: Operation) -> Self {
        Self::Operation(value)
    }
}

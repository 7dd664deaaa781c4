use crate::GraphQLBuildError;
use crate::InputValueType;
use crate::RenderGraphQL;
use indexmap::IndexMap;
use inherent::inherent;

/// An argument value.
///
/// `Value` is a closed set of kinds so every kind has exactly one text
/// encoding:
///
/// | Kind          | Encoding                                         |
/// |---------------|--------------------------------------------------|
/// | `String`      | `"text"`, or emitted raw when it begins with `$` |
/// | `Int`/`Float` | the number's literal form                        |
/// | `Boolean`     | `true` / `false`                                 |
/// | `List`        | `[v1, v2]`, elements encoded recursively         |
/// | `Object`      | `{"k": v}`, members encoded recursively          |
/// | `Variable`    | `$name`                                          |
/// | `Placeholder` | a type name such as `String!`                    |
///
/// String contents are not escaped; embedded quotes and control characters
/// are the caller's responsibility.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
    Placeholder(InputValueType),
    String(String),
    Variable(String),
}
impl Value {
    /// A reference to a declared operation variable. A leading `$` in `name`
    /// is optional.
    pub fn variable(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self::Variable(name.strip_prefix('$').unwrap_or(name).to_string())
    }

    /// Convert the dynamically typed JSON value of the argument named
    /// `argument_name`. Errors report positions relative to that argument.
    pub fn from_json_argument(
        argument_name: &str,
        json: serde_json::Value,
    ) -> Result<Self, GraphQLBuildError> {
        Self::try_from_json_at(json, argument_name)
    }

    /// A short, human-readable description of this value's kind, used in
    /// error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::Float(_) => "Float",
            Self::Int(_) => "Int",
            Self::List(_) => "List",
            Self::Object(_) => "Object",
            Self::Placeholder(_) => "type placeholder",
            Self::String(_) => "String",
            Self::Variable(_) => "variable reference",
        }
    }

    /// Check that this value (and anything nested in it) can appear in a
    /// field or directive argument position.
    pub(crate) fn validate_literal(
        &self,
        argument_path: &str,
    ) -> Result<(), GraphQLBuildError> {
        match self {
            Self::Float(f) if !f.is_finite() => {
                Err(GraphQLBuildError::UnsupportedValueKind {
                    argument_path: argument_path.to_string(),
                    found: format!("the non-finite Float `{f}`"),
                })
            },

            Self::Placeholder(input_type) => {
                Err(GraphQLBuildError::UnsupportedValueKind {
                    argument_path: argument_path.to_string(),
                    found: format!(
                        "the type placeholder `{input_type}` outside of an \
                        operation's variable declarations",
                    ),
                })
            },

            Self::List(values) => {
                for (idx, value) in values.iter().enumerate() {
                    value.validate_literal(&format!("{argument_path}[{idx}]"))?;
                }
                Ok(())
            },

            Self::Object(members) => {
                for (key, value) in members.iter() {
                    value.validate_literal(&member_path(argument_path, key))?;
                }
                Ok(())
            },

            Self::Boolean(_)
                | Self::Float(_)
                | Self::Int(_)
                | Self::String(_)
                | Self::Variable(_)
                => Ok(()),
        }
    }

    fn try_from_json_at(
        json: serde_json::Value,
        argument_path: &str,
    ) -> Result<Self, GraphQLBuildError> {
        Ok(match json {
            serde_json::Value::Bool(b) => Self::Boolean(b),

            serde_json::Value::Number(num) => {
                if let Some(i) = num.as_i64() {
                    Self::Int(i)
                } else if num.is_u64() {
                    return Err(GraphQLBuildError::UnsupportedValueKind {
                        argument_path: argument_path.to_string(),
                        found: format!("the integer `{num}` beyond the Int range"),
                    });
                } else if let Some(f) = num.as_f64().filter(|f| f.is_finite()) {
                    Self::Float(f)
                } else {
                    return Err(GraphQLBuildError::UnsupportedValueKind {
                        argument_path: argument_path.to_string(),
                        found: format!("the out-of-range number `{num}`"),
                    });
                }
            },

            serde_json::Value::String(s) => Self::String(s),

            serde_json::Value::Array(values) => Self::List(
                values.into_iter()
                    .enumerate()
                    .map(|(idx, value)| Self::try_from_json_at(
                        value,
                        &format!("{argument_path}[{idx}]"),
                    ))
                    .collect::<Result<Vec<_>, _>>()?,
            ),

            serde_json::Value::Object(members) => Self::Object(
                members.into_iter()
                    .map(|(key, value)| {
                        let value = Self::try_from_json_at(
                            value,
                            &member_path(argument_path, &key),
                        )?;
                        Ok((key, value))
                    })
                    .collect::<Result<IndexMap<_, _>, GraphQLBuildError>>()?,
            ),

            serde_json::Value::Null => {
                return Err(GraphQLBuildError::UnsupportedValueKind {
                    argument_path: argument_path.to_string(),
                    found: "`null`".to_string(),
                });
            },
        })
    }
}

fn member_path(parent_path: &str, key: &str) -> String {
    if parent_path.is_empty() {
        key.to_string()
    } else {
        format!("{parent_path}.{key}")
    }
}

#[inherent]
impl RenderGraphQL for Value {
    pub fn append_graphql(&self, sink: &mut String) {
        match self {
            Self::Boolean(b) => sink.push_str(if *b { "true" } else { "false" }),
            // `Debug` keeps the fractional part of whole floats (`1.0`).
            Self::Float(f) => sink.push_str(&format!("{f:?}")),
            Self::Int(i) => sink.push_str(&i.to_string()),

            Self::List(values) => {
                sink.push('[');
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        sink.push_str(", ");
                    }
                    value.append_graphql(sink);
                }
                sink.push(']');
            },

            Self::Object(members) => {
                sink.push('{');
                for (idx, (key, value)) in members.iter().enumerate() {
                    if idx > 0 {
                        sink.push_str(", ");
                    }
                    sink.push('"');
                    sink.push_str(key);
                    sink.push_str("\": ");
                    value.append_graphql(sink);
                }
                sink.push('}');
            },

            Self::Placeholder(input_type) => input_type.append_graphql(sink),

            // Strings beginning with `$` are references to declared
            // variables and stay unquoted.
            Self::String(s) if s.starts_with('$') => sink.push_str(s),
            Self::String(s) => {
                sink.push('"');
                sink.push_str(s);
                sink.push('"');
            },

            Self::Variable(name) => {
                sink.push('$');
                sink.push_str(name);
            },
        }
    }

    pub fn to_graphql(&self) -> String;
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<InputValueType> for Value {
    fn from(value: InputValueType) -> Self {
        Self::Placeholder(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
impl std::convert::From<IndexMap<String, Value>> for Value {
    fn from(members: IndexMap<String, Value>) -> Self {
        Self::Object(members)
    }
}
impl std::convert::TryFrom<serde_json::Value> for Value {
    type Error = GraphQLBuildError;

    /// Convert a dynamically typed JSON value. `null` has no counterpart and
    /// fails with [`GraphQLBuildError::UnsupportedValueKind`].
    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Self::try_from_json_at(json, "")
    }
}

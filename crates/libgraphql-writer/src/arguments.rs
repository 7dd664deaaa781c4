use crate::GraphQLBuildError;
use crate::StructuralViolation;
use crate::Value;
use indexmap::IndexMap;

/// Argument name → [`Value`] pairs, kept in insertion order so rendered text
/// is reproducible.
pub type Arguments = IndexMap<String, Value>;

/// Collect `(name, value)` pairs into [`Arguments`], preserving their order.
///
/// ```
/// use libgraphql_writer::arguments_of;
///
/// let args = arguments_of([("id", 12)]);
/// assert_eq!(args.len(), 1);
/// ```
pub fn arguments_of<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Arguments
where
    K: Into<String>,
    V: Into<Value>,
{
    pairs.into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// Check every argument of a field or directive for values that have no
/// literal form in an argument position.
pub(crate) fn validate_arguments(
    arguments: &Arguments,
) -> Result<(), GraphQLBuildError> {
    for (name, value) in arguments.iter() {
        value.validate_literal(name)?;
    }
    Ok(())
}

/// Normalize an operation variable's name so that it always carries its
/// leading `$`.
pub(crate) fn normalize_variable_name(name: impl Into<String>) -> String {
    let name = name.into();
    if name.starts_with('$') {
        name
    } else {
        format!("${name}")
    }
}

/// Check an operation's variable declarations: each name may be declared
/// once and each value must be a type placeholder.
pub(crate) fn validate_variable_definitions(
    operation_name: &str,
    variables: &[(String, Value)],
) -> Result<Arguments, GraphQLBuildError> {
    let mut definitions = Arguments::new();
    for (name, value) in variables.iter() {
        let name = normalize_variable_name(name.as_str());
        if !matches!(value, Value::Placeholder(_)) {
            return Err(GraphQLBuildError::UnsupportedValueKind {
                argument_path: name,
                found: format!(
                    "a {} value where a variable type declaration was \
                    expected",
                    value.kind_name(),
                ),
            });
        }
        if definitions.contains_key(&name) {
            return Err(StructuralViolation::DuplicateVariableDeclaration {
                operation_name: operation_name.to_string(),
                variable_name: name,
            }.into());
        }
        definitions.insert(name, value.to_owned());
    }
    Ok(definitions)
}

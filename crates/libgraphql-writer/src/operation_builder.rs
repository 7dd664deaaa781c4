use crate::arguments::validate_variable_definitions;
use crate::selection_set::validate_selection_set;
use crate::Field;
use crate::GraphQLBuildError;
use crate::Operation;
use crate::OperationKind;
use crate::SelectionSet;
use crate::Value;

type Result<T> = std::result::Result<T, GraphQLBuildError>;

/// Accumulates the parts of an [`Operation`].
///
/// ```
/// use libgraphql_writer::Field;
/// use libgraphql_writer::InputValueKind;
/// use libgraphql_writer::InputValueType;
/// use libgraphql_writer::Operation;
/// use libgraphql_writer::OperationKind;
///
/// let op = Operation::builder(OperationKind::Query)
///     .set_name("getUser")
///     .add_variable("id", InputValueType::required(InputValueKind::String))
///     .add_selection(
///         Field::builder("user")
///             .add_argument("id", "$id")
///             .add_selection("name")
///             .build()
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
/// assert_eq!(
///     op.to_graphql(),
///     "query getUser($id: String!) { user(id: $id) { name } }",
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    kind: OperationKind,
    name: String,
    selection_set: SelectionSet,
    variables: Vec<(String, Value)>,
}
impl OperationBuilder {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            name: String::new(),
            selection_set: vec![],
            variables: vec![],
        }
    }

    /// Add a [`Field`] after any previously added selections.
    pub fn add_selection(mut self, field: impl Into<Field>) -> Self {
        self.selection_set.push(field.into());
        self
    }

    /// Add each of `fields` after any previously added selections.
    pub fn add_selections<F: Into<Field>>(
        mut self,
        fields: impl IntoIterator<Item = F>,
    ) -> Self {
        self.selection_set.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Declare a variable after any previously declared variables. The
    /// leading `$` on `name` is optional.
    ///
    /// `value` is expected to be a type placeholder
    /// ([`InputValueType`](crate::InputValueType)); anything else fails at
    /// [`build()`](OperationBuilder::build).
    pub fn add_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.variables.push((name.into(), value.into()));
        self
    }

    /// Consume this [`OperationBuilder`] to produce an [`Operation`].
    pub fn build(self) -> Result<Operation> {
        let kind = self.kind;
        let name = self.name;
        validate_selection_set(&self.selection_set, || {
            if name.is_empty() {
                format!("an anonymous {}", kind.keyword())
            } else {
                format!("the `{name}` {}", kind.keyword())
            }
        })?;
        let variables = validate_variable_definitions(&name, &self.variables)?;

        log::debug!(
            "Built {} `{name}` with {} variables and {} root selections.",
            kind.keyword(),
            variables.len(),
            self.selection_set.len(),
        );

        Ok(Operation {
            kind,
            name,
            selection_set: self.selection_set,
            variables,
        })
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

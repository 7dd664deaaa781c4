use crate::arguments::validate_arguments;
use crate::selection_set::validate_selection_set;
use crate::Arguments;
use crate::Field;
use crate::GraphQLBuildError;
use crate::InlineFragment;
use crate::SelectionSet;
use crate::StructuralViolation;
use crate::Value;

type Result<T> = std::result::Result<T, GraphQLBuildError>;

/// Accumulates the parts of a [`Field`]. All validation happens in
/// [`build()`](FieldBuilder::build).
///
/// ```
/// use libgraphql_writer::Field;
///
/// let user = Field::builder("user")
///     .add_argument("id", 12345)
///     .add_selection("firstName")
///     .build()
///     .unwrap();
/// assert_eq!(user.to_graphql(), "user(id: 12345) { firstName }");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldBuilder {
    alias: Option<String>,
    arguments: Arguments,
    inline_fragments: Vec<InlineFragment>,
    name: String,
    selection_set: SelectionSet,
}
impl FieldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: Arguments::new(),
            inline_fragments: vec![],
            name: name.into(),
            selection_set: vec![],
        }
    }

    /// Add an argument after any previously added arguments. Re-adding an
    /// existing name replaces its value in place.
    pub fn add_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Add each of `arguments` after any previously added arguments.
    pub fn add_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments.extend(arguments);
        self
    }

    /// Add an [`InlineFragment`] after any previously added
    /// `InlineFragment`s.
    pub fn add_inline_fragment(mut self, inline_fragment: InlineFragment) -> Self {
        self.inline_fragments.push(inline_fragment);
        self
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

    /// Consume this [`FieldBuilder`] to produce a [`Field`].
    ///
    /// Fails when a root field was added as a selection, when this is a root
    /// field given an alias or arguments, or when an argument value has no
    /// literal form.
    pub fn build(self) -> Result<Field> {
        if self.name.is_empty() {
            if let Some(alias) = self.alias.as_deref().filter(|a| !a.is_empty()) {
                return Err(StructuralViolation::AliasedRootField {
                    alias: alias.to_string(),
                }.into());
            }
            if !self.arguments.is_empty() {
                return Err(StructuralViolation::RootFieldWithArguments.into());
            }
        }
        validate_selection_set(&self.selection_set, || {
            format!("the `{}` field", self.name)
        })?;
        validate_arguments(&self.arguments)?;

        log::trace!(
            "Built the `{}` field with {} arguments, {} selections and {} \
            inline fragments.",
            self.name,
            self.arguments.len(),
            self.selection_set.len(),
            self.inline_fragments.len(),
        );

        Ok(Field {
            alias: self.alias,
            arguments: self.arguments,
            inline_fragments: self.inline_fragments,
            name: self.name,
            selection_set: self.selection_set,
        })
    }

    pub fn set_alias(mut self, alias: impl Into<String>) -> Self {
        let _ = self.alias.insert(alias.into());
        self
    }
}

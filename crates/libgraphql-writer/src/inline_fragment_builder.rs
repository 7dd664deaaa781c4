use crate::selection_set::validate_selection_set;
use crate::Directive;
use crate::Field;
use crate::GraphQLBuildError;
use crate::InlineFragment;
use crate::SelectionSet;
use crate::StructuralViolation;

type Result<T> = std::result::Result<T, GraphQLBuildError>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineFragmentBuilder {
    directive: Option<Directive>,
    selection_set: SelectionSet,
    type_condition: Option<String>,
}
impl InlineFragmentBuilder {
    pub fn new() -> Self {
        Self::default()
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

    /// Consume this [`InlineFragmentBuilder`] to produce an
    /// [`InlineFragment`].
    pub fn build(self) -> Result<InlineFragment> {
        let type_condition = self.type_condition.filter(|t| !t.is_empty());
        if type_condition.is_none() && self.directive.is_none() {
            return Err(
                StructuralViolation::InlineFragmentWithoutTypeConditionOrDirective
                    .into()
            );
        }

        validate_selection_set(&self.selection_set, || {
            match &type_condition {
                Some(type_condition) => format!(
                    "an inline fragment on `{type_condition}`",
                ),
                None => "an inline fragment".to_string(),
            }
        })?;

        Ok(InlineFragment {
            directive: self.directive,
            selection_set: self.selection_set,
            type_condition,
        })
    }

    pub fn set_directive(mut self, directive: Directive) -> Self {
        let _ = self.directive.insert(directive);
        self
    }

    pub fn set_type_condition(mut self, type_condition: impl Into<String>) -> Self {
        let _ = self.type_condition.insert(type_condition.into());
        self
    }
}

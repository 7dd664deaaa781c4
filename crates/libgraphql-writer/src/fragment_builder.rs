use crate::selection_set::validate_selection_set;
use crate::Directive;
use crate::Field;
use crate::Fragment;
use crate::GraphQLBuildError;
use crate::SelectionSet;
use crate::StructuralViolation;

type Result<T> = std::result::Result<T, GraphQLBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentBuilder {
    directive: Option<Directive>,
    name: String,
    selection_set: SelectionSet,
    type_condition: String,
}
impl FragmentBuilder {
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> Self {
        Self {
            directive: None,
            name: name.into(),
            selection_set: vec![],
            type_condition: type_condition.into(),
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

    /// Consume this [`FragmentBuilder`] to produce a [`Fragment`].
    pub fn build(self) -> Result<Fragment> {
        if self.name.is_empty() {
            return Err(StructuralViolation::FragmentWithoutName {
                type_condition: self.type_condition,
            }.into());
        }

        if self.type_condition.is_empty() {
            return Err(StructuralViolation::FragmentWithoutTypeCondition {
                fragment_name: self.name,
            }.into());
        }

        validate_selection_set(&self.selection_set, || {
            format!("the `{}` fragment", self.name)
        })?;

        log::trace!(
            "Built the `{}` fragment on `{}` with {} selections.",
            self.name,
            self.type_condition,
            self.selection_set.len(),
        );

        Ok(Fragment {
            directive: self.directive,
            name: self.name,
            selection_set: self.selection_set,
            type_condition: self.type_condition,
        })
    }

    pub fn set_directive(mut self, directive: Directive) -> Self {
        let _ = self.directive.insert(directive);
        self
    }
}

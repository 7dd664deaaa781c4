use crate::Field;
use crate::GraphQLBuildError;
use crate::StructuralViolation;

/// The ordered fields selected under a field, fragment, or operation.
pub type SelectionSet = Vec<Field>;

/// Collect fields (or anything convertible into a [`Field`], such as a bare
/// field name) into a [`SelectionSet`].
///
/// ```
/// use libgraphql_writer::selection_set_of;
///
/// let fields = selection_set_of(["firstName", "lastName"]);
/// assert_eq!(fields.len(), 2);
/// ```
pub fn selection_set_of<F: Into<Field>>(
    fields: impl IntoIterator<Item = F>,
) -> SelectionSet {
    fields.into_iter().map(Into::into).collect()
}

/// Reject any root (unnamed) field nested in `fields`.
///
/// `describe_parent` is only invoked to build the error message.
pub(crate) fn validate_selection_set(
    fields: &[Field],
    describe_parent: impl FnOnce() -> String,
) -> Result<(), GraphQLBuildError> {
    if fields.iter().any(Field::is_root) {
        return Err(StructuralViolation::NestedRootField {
            parent: describe_parent(),
        }.into());
    }
    Ok(())
}

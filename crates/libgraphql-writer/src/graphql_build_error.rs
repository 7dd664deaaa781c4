use thiserror::Error;

/// Errors raised while building AST nodes.
///
/// Every failure is a programming error in the caller's tree shape or
/// argument values; the same input always fails the same way.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphQLBuildError {
    #[error("Invalid document structure: {0}")]
    StructuralViolation(#[from] StructuralViolation),

    #[error(
        "Unsupported value at argument path `{argument_path}`: found \
        {found}."
    )]
    UnsupportedValueKind {
        argument_path: String,
        found: String,
    },
}

/// The tree-shape rules a [`GraphQLBuildError::StructuralViolation`] can
/// report.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StructuralViolation {
    #[error(
        "A root (unnamed) field cannot carry the alias `{alias}`."
    )]
    AliasedRootField {
        alias: String,
    },

    #[error(
        "The `{variable_name}` variable is declared more than once on the \
        `{operation_name}` operation."
    )]
    DuplicateVariableDeclaration {
        operation_name: String,
        variable_name: String,
    },

    #[error(
        "Fragment definitions must be named, but a fragment on \
        `{type_condition}` was given an empty name."
    )]
    FragmentWithoutName {
        type_condition: String,
    },

    #[error(
        "Fragments must specify the type they apply to, but none was \
        specified for the `{fragment_name}` fragment."
    )]
    FragmentWithoutTypeCondition {
        fragment_name: String,
    },

    #[error(
        "Inline fragments must specify a type condition, a directive, or \
        both."
    )]
    InlineFragmentWithoutTypeConditionOrDirective,

    #[error("A root (unnamed) field cannot carry arguments.")]
    RootFieldWithArguments,

    #[error(
        "A root (unnamed) field cannot be added to the selection set of \
        {parent}."
    )]
    NestedRootField {
        parent: String,
    },
}

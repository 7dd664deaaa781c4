//! Tests for named [`Fragment`] definitions.

use crate::selection_set_of;
use crate::Directive;
use crate::Field;
use crate::Fragment;
use crate::GraphQLBuildError;
use crate::StructuralViolation;

#[test]
fn named_fragment_renders_definition() {
    let frag =
        Fragment::new("UserFields", "User", selection_set_of(["id", "name"]))
            .unwrap();
    assert_eq!(frag.to_graphql(), "fragment UserFields on User { id name }");
    assert_eq!(frag.name(), "UserFields");
    assert_eq!(frag.type_condition(), "User");
}

#[test]
fn named_fragment_with_directive() {
    let frag =
        Fragment::builder("UserFields", "User")
            .set_directive(Directive::new("cached"))
            .add_selection("id")
            .build()
            .unwrap();
    assert_eq!(frag.to_graphql(), "fragment UserFields on User @cached { id }");
}

#[test]
fn named_fragment_with_nested_fields() {
    let avatar =
        Field::builder("avatar")
            .add_argument("size", 64)
            .add_selection("url")
            .build()
            .unwrap();
    let frag =
        Fragment::builder("UserFields", "User")
            .add_selections(["id"])
            .add_selection(avatar)
            .build()
            .unwrap();
    assert_eq!(
        frag.to_graphql(),
        "fragment UserFields on User { id avatar(size: 64) { url } }",
    );
}

#[test]
fn fragment_requires_name() {
    assert_eq!(
        Fragment::new("", "User", selection_set_of(["id"])),
        Err(GraphQLBuildError::StructuralViolation(
            StructuralViolation::FragmentWithoutName {
                type_condition: "User".to_string(),
            },
        )),
    );
}

#[test]
fn fragment_requires_type_condition() {
    assert_eq!(
        Fragment::new("UserFields", "", selection_set_of(["id"])),
        Err(GraphQLBuildError::StructuralViolation(
            StructuralViolation::FragmentWithoutTypeCondition {
                fragment_name: "UserFields".to_string(),
            },
        )),
    );
}

#[test]
fn fragment_rejects_nested_root_field() {
    let result = Fragment::new("UserFields", "User", vec![Field::from_name("")]);
    assert!(matches!(
        result,
        Err(GraphQLBuildError::StructuralViolation(
            StructuralViolation::NestedRootField { .. },
        )),
    ));
}

//! Tests for building and rendering [`Field`]s.

use crate::arguments_of;
use crate::selection_set_of;
use crate::Field;
use crate::Fragment;
use crate::GraphQLBuildError;
use crate::InlineFragment;
use crate::InputValueKind;
use crate::InputValueType;
use crate::Operation;
use crate::StructuralViolation;
use std::collections::HashSet;

fn user_field() -> Field {
    let profile_picture =
        Field::builder("profilePicture")
            .add_selections(["width", "height"])
            .build()
            .unwrap();

    Field::builder("user")
        .add_argument("id", 12345)
        .add_selections(["firstName", "lastName", "username"])
        .add_selection(profile_picture)
        .build()
        .unwrap()
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn leaf_field_renders_as_its_name() {
    assert_eq!(Field::from_name("width").to_graphql(), "width");
    assert_eq!(Field::from("height").to_graphql(), "height");
}

/// A field with arguments and a nested selection set.
#[test]
fn nested_field_with_argument() {
    assert_eq!(
        user_field().to_graphql().trim(),
        "user(id: 12345) { firstName lastName username profilePicture { width height } }",
    );
}

/// A root field renders as just its selection set.
#[test]
fn root_field_renders_as_bare_selection_set() {
    let root = Field::root(vec![user_field()]).unwrap();
    assert!(root.is_root());
    assert_eq!(
        root.to_graphql(),
        "{ user(id: 12345) { firstName lastName username profilePicture { width height } } }",
    );
}

#[test]
fn alias_prefixes_the_field_name() {
    let me =
        Field::builder("user")
            .set_alias("me")
            .add_argument("id", 1)
            .add_selection("name")
            .build()
            .unwrap();
    assert_eq!(me.to_graphql(), "me: user(id: 1) { name }");
    assert_eq!(me.selected_name(), "me");
}

#[test]
fn empty_alias_is_omitted() {
    let field = Field::builder("user").set_alias("").build().unwrap();
    assert_eq!(field.to_graphql(), "user");
    assert_eq!(field.selected_name(), "user");
}

/// Arguments render comma-separated in insertion order.
#[test]
fn arguments_keep_insertion_order() {
    let friends =
        Field::builder("friends")
            .add_argument("first", 10)
            .add_argument("after", "$cursor")
            .add_argument("orderBy", "NAME")
            .add_selection("id")
            .build()
            .unwrap();
    assert_eq!(
        friends.to_graphql(),
        "friends(first: 10, after: $cursor, orderBy: \"NAME\") { id }",
    );
}

#[test]
fn string_arguments_are_quoted_unless_variables() {
    let by_literal =
        Field::builder("user").add_argument("id", "abc").build().unwrap();
    let by_variable =
        Field::builder("user").add_argument("id", "$id").build().unwrap();
    assert_eq!(by_literal.to_graphql(), "user(id: \"abc\")");
    assert_eq!(by_variable.to_graphql(), "user(id: $id)");
}

#[test]
fn list_and_object_arguments() {
    let field =
        Field::builder("users")
            .add_arguments(arguments_of([
                ("ids", crate::Value::from(vec![1, 2, 3])),
                ("filter", crate::Value::Object(
                    [("active".to_string(), crate::Value::from(true))]
                        .into_iter()
                        .collect(),
                )),
            ]))
            .add_selection("id")
            .build()
            .unwrap();
    assert_eq!(
        field.to_graphql(),
        "users(ids: [1, 2, 3], filter: {\"active\": true}) { id }",
    );
}

/// Inline fragments render after the field's own selections, inside the
/// field's selection set.
#[test]
fn inline_fragments_follow_fields() {
    let on_user =
        InlineFragment::on("User", selection_set_of(["name"])).unwrap();
    let on_page =
        InlineFragment::on("Page", selection_set_of(["title"])).unwrap();
    let node =
        Field::builder("node")
            .add_argument("id", 4)
            .add_inline_fragment(on_user)
            .add_selection("id")
            .add_inline_fragment(on_page)
            .build()
            .unwrap();
    assert_eq!(
        node.to_graphql(),
        "node(id: 4) { id ... on User { name } ... on Page { title } }",
    );
}

#[test]
fn field_with_only_inline_fragments() {
    let search =
        Field::builder("search")
            .add_inline_fragment(
                InlineFragment::on("User", selection_set_of(["name"])).unwrap(),
            )
            .build()
            .unwrap();
    assert_eq!(search.to_graphql(), "search { ... on User { name } }");
}

#[test]
fn fragment_spread_renders_fragment_name() {
    let user_fields =
        Fragment::new("UserFields", "User", selection_set_of(["id"])).unwrap();
    let user =
        Field::builder("user")
            .add_selection(Field::fragment_spread(&user_fields))
            .build()
            .unwrap();
    assert_eq!(user.to_graphql(), "user { ...UserFields }");
}

/// An operation can be re-used as an aliased field; its variable
/// declarations are left behind.
#[test]
fn field_from_operation() {
    let viewer =
        Operation::builder(crate::OperationKind::Query)
            .set_name("viewer")
            .add_variable("id", InputValueType::required(InputValueKind::Int))
            .add_selection("name")
            .build()
            .unwrap();

    assert_eq!(
        Field::from_operation(&viewer, Some("me")).to_graphql(),
        "me: viewer { name }",
    );
    assert_eq!(
        Field::from_operation(&viewer, None).to_graphql(),
        "viewer { name }",
    );
}

// =============================================================================
// Equality
// =============================================================================

/// Fields are equal when their rendered text is equal.
#[test]
fn equality_is_by_rendered_text() {
    assert_eq!(user_field(), user_field());

    let other =
        Field::builder("user").add_argument("id", 1).build().unwrap();
    assert_ne!(user_field(), other);

    let set: HashSet<Field> =
        [user_field(), user_field(), other].into_iter().collect();
    assert_eq!(set.len(), 2);
}

// =============================================================================
// Validation
// =============================================================================

/// A root field can never be nested in another field's selection set.
#[test]
fn nested_root_field_is_a_structural_violation() {
    let result =
        Field::builder("user")
            .add_selection("name")
            .add_selection(Field::from_name(""))
            .build();
    assert_eq!(
        result,
        Err(GraphQLBuildError::StructuralViolation(
            StructuralViolation::NestedRootField {
                parent: "the `user` field".to_string(),
            },
        )),
    );
}

#[test]
fn root_field_cannot_nest_root_field() {
    let inner = Field::root(selection_set_of(["id"])).unwrap();
    assert!(matches!(
        Field::root(vec![inner]),
        Err(GraphQLBuildError::StructuralViolation(
            StructuralViolation::NestedRootField { .. },
        )),
    ));
}

/// A root field has no name to alias, so an alias would render as `x:  { … }`.
#[test]
fn aliased_root_field_is_a_structural_violation() {
    let result = Field::builder("").set_alias("x").add_selection("a").build();
    match result {
        Err(GraphQLBuildError::StructuralViolation(
            StructuralViolation::AliasedRootField { alias },
        )) => assert_eq!(alias, "x"),
        other => panic!("Expected an aliased root field error: {other:?}"),
    }
}

#[test]
fn root_field_with_arguments_is_a_structural_violation() {
    assert!(matches!(
        Field::builder("").add_argument("id", 1).add_selection("a").build(),
        Err(GraphQLBuildError::StructuralViolation(
            StructuralViolation::RootFieldWithArguments,
        )),
    ));
}

/// An empty alias on a root field is treated as no alias.
#[test]
fn root_field_with_empty_alias_renders_bare() {
    let root = Field::builder("").set_alias("").add_selection("a").build().unwrap();
    assert!(root.is_root());
    assert_eq!(root.to_graphql(), "{ a }");
}

#[test]
fn anonymous_operation_as_field_drops_alias() {
    let anonymous = Operation::query("", selection_set_of(["id"])).unwrap();
    let field = Field::from_operation(&anonymous, Some("me"));
    assert!(field.is_root());
    assert_eq!(field.to_graphql(), "{ id }");
}

/// Type placeholders only belong in operation variable declarations.
#[test]
fn placeholder_argument_is_unsupported() {
    let result =
        Field::builder("user")
            .add_argument("id", InputValueType::required(InputValueKind::Int))
            .build();
    match result {
        Err(GraphQLBuildError::UnsupportedValueKind { argument_path, .. }) => {
            assert_eq!(argument_path, "id");
        },
        other => panic!("Expected an unsupported value error: {other:?}"),
    }
}

#[test]
fn non_finite_float_argument_is_unsupported() {
    let result =
        Field::builder("scores")
            .add_argument("values", vec![1.0, f64::NAN])
            .build();
    match result {
        Err(GraphQLBuildError::UnsupportedValueKind { argument_path, .. }) => {
            assert_eq!(argument_path, "values[1]");
        },
        other => panic!("Expected an unsupported value error: {other:?}"),
    }
}

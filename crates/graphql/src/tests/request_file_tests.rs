use crate::request_file::RequestFile;
use libgraphql_writer::Definition;
use libgraphql_writer::GraphQLBuildError;
use libgraphql_writer::StructuralViolation;

fn definitions_from(json: &str) -> Result<Vec<Definition>, GraphQLBuildError> {
    let request_file: RequestFile = serde_json::from_str(json).unwrap();
    request_file.into_definitions()
}

#[test]
fn operation_description_renders() {
    let definitions = definitions_from(r#"{
        "definitions": [
            {"operation": {
                "kind": "query",
                "name": "getUser",
                "variables": {"$id": "String!"},
                "selection_set": [
                    {
                        "name": "user",
                        "arguments": {"id": "$id"},
                        "selection_set": [
                            "name",
                            {"name": "friends", "arguments": {"first": 10}, "selection_set": ["name"]}
                        ]
                    }
                ]
            }}
        ]
    }"#).unwrap();

    assert_eq!(definitions.len(), 1);
    assert_eq!(
        definitions[0].to_graphql(),
        "query getUser($id: String!) { user(id: $id) { name friends(first: 10) { name } } }",
    );
}

#[test]
fn fragment_and_inline_fragment_descriptions_render() {
    let definitions = definitions_from(r#"{
        "definitions": [
            {"fragment": {
                "name": "UserFields",
                "type_condition": "User",
                "directive": {"name": "cached"},
                "selection_set": ["id"]
            }},
            {"field": {
                "selection_set": [
                    {
                        "name": "node",
                        "alias": "n",
                        "selection_set": ["id"],
                        "inline_fragments": [
                            {"type_condition": "User", "selection_set": ["name"]},
                            {
                                "directive": {"name": "include", "arguments": {"if": "$full"}},
                                "selection_set": ["createdAt"]
                            }
                        ]
                    }
                ]
            }}
        ]
    }"#).unwrap();

    assert_eq!(
        definitions[0].to_graphql(),
        "fragment UserFields on User @cached { id }",
    );
    assert_eq!(
        definitions[1].to_graphql(),
        "{ n: node { id ... on User { name } ... @include(if: $full) { createdAt } } }",
    );
}

#[test]
fn nested_root_field_description_is_rejected() {
    let result = definitions_from(r#"{
        "definitions": [
            {"field": {"name": "user", "selection_set": [{"selection_set": ["id"]}]}}
        ]
    }"#);
    assert!(matches!(
        result,
        Err(GraphQLBuildError::StructuralViolation(
            StructuralViolation::NestedRootField { .. },
        )),
    ));
}

#[test]
fn null_argument_description_is_rejected() {
    let result = definitions_from(r#"{
        "definitions": [
            {"field": {"name": "user", "arguments": {"filter": {"id": null}}}}
        ]
    }"#);
    match result {
        Err(GraphQLBuildError::UnsupportedValueKind { argument_path, .. }) => {
            assert_eq!(argument_path, "filter.id");
        },
        other => panic!("Expected an unsupported value error: {other:?}"),
    }
}

#[test]
fn unknown_variable_type_reports_variable_name() {
    let result = definitions_from(r#"{
        "definitions": [
            {"operation": {"kind": "query", "variables": {"$id": "ID!"}, "selection_set": ["viewer"]}}
        ]
    }"#);
    match result {
        Err(GraphQLBuildError::UnsupportedValueKind { argument_path, .. }) => {
            assert_eq!(argument_path, "$id");
        },
        other => panic!("Expected an unsupported value error: {other:?}"),
    }
}

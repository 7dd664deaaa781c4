use crate::arguments_of;
use crate::Arguments;
use crate::Directive;
use crate::GraphQLBuildError;
use crate::Value;

#[test]
fn directive_without_arguments_omits_parens() {
    assert_eq!(Directive::new("skip").to_graphql(), "@skip");
    assert_eq!(
        Directive::with_arguments("cached", Arguments::new())
            .unwrap()
            .to_graphql(),
        "@cached",
    );
}

#[test]
fn directive_with_arguments() {
    let include = Directive::with_arguments(
        "include",
        arguments_of([("if", Value::variable("withFriends"))]),
    ).unwrap();
    assert_eq!(include.to_graphql(), "@include(if: $withFriends)");
    assert_eq!(format!("{include}"), "@include(if: $withFriends)");

    let skip = Directive::with_arguments(
        "skip",
        arguments_of([("if", true)]),
    ).unwrap();
    assert_eq!(skip.to_graphql(), "@skip(if: true)");
}

#[test]
fn directive_rejects_non_finite_float() {
    let result = Directive::with_arguments(
        "sample",
        arguments_of([("rate", f64::INFINITY)]),
    );
    assert!(matches!(
        result,
        Err(GraphQLBuildError::UnsupportedValueKind { .. }),
    ));
}

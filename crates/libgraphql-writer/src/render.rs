//! Text rendering shared by every node: argument lists, variable
//! declarations, and selection sets.
//!
//! All functions append to a caller-owned `sink` so that rendering a whole
//! tree builds exactly one `String`.

use crate::Arguments;
use crate::Field;
use crate::InlineFragment;
use crate::RenderGraphQL;

/// Append `(name1: value1, name2: value2)`, or nothing at all when
/// `arguments` is empty.
pub(crate) fn append_arguments(arguments: &Arguments, sink: &mut String) {
    if arguments.is_empty() {
        return;
    }

    sink.push('(');
    for (idx, (name, value)) in arguments.iter().enumerate() {
        if idx > 0 {
            sink.push_str(", ");
        }
        sink.push_str(name);
        sink.push_str(": ");
        value.append_graphql(sink);
    }
    sink.push(')');
}

/// Append an operation's variable declarations (`($id: String!)`), or
/// nothing at all when there are none.
///
/// Declarations are validated to hold only type placeholders when the
/// operation is built, so every value encodes as a type name here.
pub(crate) fn append_variable_definitions(
    variables: &Arguments,
    sink: &mut String,
) {
    append_arguments(variables, sink)
}

/// Append `{ field1 field2 … fragment1 fragment2 }`, or nothing at all when
/// both sequences are empty.
///
/// Fields come first, then inline fragments, each group in the order given.
/// Callers are responsible for any separator before the opening brace.
pub(crate) fn append_selection_set(
    fields: &[Field],
    inline_fragments: &[InlineFragment],
    sink: &mut String,
) {
    if fields.is_empty() && inline_fragments.is_empty() {
        return;
    }

    sink.push_str("{ ");
    let mut first = true;
    let selections =
        fields.iter()
            .map(|field| field as &dyn RenderGraphQL)
            .chain(inline_fragments.iter().map(|frag| frag as &dyn RenderGraphQL));
    for selection in selections {
        if !first {
            sink.push(' ');
        }
        first = false;
        selection.append_graphql(sink);
    }
    sink.push_str(" }");
}

/// Append a space followed by the selection set, or nothing at all when the
/// selection set is empty.
pub(crate) fn append_spaced_selection_set(
    fields: &[Field],
    inline_fragments: &[InlineFragment],
    sink: &mut String,
) {
    if fields.is_empty() && inline_fragments.is_empty() {
        return;
    }
    sink.push(' ');
    append_selection_set(fields, inline_fragments, sink);
}

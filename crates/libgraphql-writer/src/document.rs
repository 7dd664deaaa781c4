use crate::Definition;
use crate::RenderGraphQL;
use inherent::inherent;

/// A complete request string made of one or more [`Definition`]s.
///
/// A document renders each definition on its own line and wraps the whole
/// sequence in a single `{ … }` block. An empty document renders as the
/// empty string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub(crate) definitions: Vec<Definition>,
}
impl Document {
    pub fn new<D: Into<Definition>>(
        definitions: impl IntoIterator<Item = D>,
    ) -> Self {
        Self {
            definitions: definitions.into_iter().map(Into::into).collect(),
        }
    }

    /// Return a new document with `definition` appended.
    pub fn with_definition(mut self, definition: impl Into<Definition>) -> Self {
        self.definitions.push(definition.into());
        self
    }

    pub fn definitions(&self) -> &[Definition] {
        self.definitions.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[inherent]
impl RenderGraphQL for Document {
    pub fn append_graphql(&self, sink: &mut String) {
        if self.definitions.is_empty() {
            return;
        }

        sink.push_str("{ ");
        for (idx, definition) in self.definitions.iter().enumerate() {
            if idx > 0 {
                sink.push('\n');
            }
            definition.append_graphql(sink);
        }
        sink.push_str(" }");
    }

    pub fn to_graphql(&self) -> String;
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

/// The kind of a GraphQL [`Operation`](crate::Operation).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    /// A write followed by a fetch.
    Mutation,

    /// A read-only fetch.
    Query,
}
impl OperationKind {
    /// The keyword an operation of this kind starts with.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

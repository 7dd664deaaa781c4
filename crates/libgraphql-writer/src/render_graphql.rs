/// Trait implemented by every node that can be written out as GraphQL text.
///
/// All node types implement this trait via `#[inherent] impl RenderGraphQL`,
/// so `to_graphql()` is callable without importing the trait while generic
/// code (such as [`Document`](crate::Document)) can still bound on it.
///
/// Rendering never fails: every structural and value-kind check happens when
/// a node is built, so a node that exists always has a valid text form.
pub trait RenderGraphQL {
    /// Append this node's GraphQL text to `sink`.
    fn append_graphql(&self, sink: &mut String);

    /// Return this node's GraphQL text.
    ///
    /// Convenience wrapper around
    /// [`append_graphql`](RenderGraphQL::append_graphql).
    fn to_graphql(&self) -> String {
        let mut s = String::new();
        self.append_graphql(&mut s);
        s
    }
}

use crate::Definition;
use crate::Operation;
use crate::RenderGraphQL;
use serde::Serialize;

/// The JSON body a GraphQL server expects over HTTP:
/// `{"query": "…", "operationName": "…", "variables": {…}}`.
///
/// Sending the body is left to the caller's HTTP client.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Map<String, serde_json::Value>>,
}
impl GraphQLRequest {
    /// A request whose query is the rendered text of `node`.
    pub fn new(node: &impl RenderGraphQL) -> Self {
        Self {
            operation_name: None,
            query: node.to_graphql(),
            variables: None,
        }
    }

    /// A request for `definition`, naming the operation when it has a name.
    pub fn from_definition(definition: &Definition) -> Self {
        Self {
            operation_name: definition.operation_name().map(str::to_string),
            ..Self::new(definition)
        }
    }

    /// A request for `operation`, naming the operation when it has a name.
    pub fn from_operation(operation: &Operation) -> Self {
        Self {
            operation_name: Some(operation.name())
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            ..Self::new(operation)
        }
    }

    /// Set the value sent for a declared variable. A leading `$` on `name` is
    /// dropped since JSON variable maps key variables by bare name.
    pub fn add_variable(
        mut self,
        name: &str,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        let name = name.strip_prefix('$').unwrap_or(name);
        self.variables
            .get_or_insert_with(serde_json::Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    /// Serialize this request as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

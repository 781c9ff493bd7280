use async_graphql::{Request, Response, Variables};
use marquee_store::{SeedData, Store};
use serde_json::Value;

use crate::graphql_api::{api_schema, ApiSchema, ApiSchemaContext};

/// A fresh store holding the built-in catalogue.
pub fn test_store() -> Store {
    Store::new(SeedData::default()).expect("Invalid default seed data")
}

/// A fresh API schema backed by its own [`test_store`].
pub fn test_schema() -> ApiSchema {
    api_schema(ApiSchemaContext {
        store: test_store(),
    })
}

/// A fresh API schema backed by a store holding `seed`.
pub fn test_schema_with_seed(seed: SeedData) -> ApiSchema {
    api_schema(ApiSchemaContext {
        store: Store::new(seed).expect("Invalid seed data"),
    })
}

/// Executes `query` and returns the raw response.
pub async fn execute_raw(schema: &ApiSchema, query: &str, variables: Value) -> Response {
    let request = Request::new(query).variables(Variables::from_json(variables));
    schema.execute(request).await
}

/// Executes `query` and returns its `data` as JSON. Panics if the response
/// carries any errors.
pub async fn execute(schema: &ApiSchema, query: &str) -> Value {
    let response = execute_raw(schema, query, Value::Null).await;
    assert!(
        response.errors.is_empty(),
        "Unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().expect("Non-JSON response data")
}

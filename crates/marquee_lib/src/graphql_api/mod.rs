pub mod api_types;
mod server;

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, Schema, SchemaBuilder};
use async_graphql_axum::GraphQL;
use axum::response::IntoResponse;
use axum::routing::{get, post_service};
use axum::Router;
use marquee_store::Store;

pub use self::server::{MutationRoot, QueryRoot};

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct ApiSchemaContext {
    pub store: Store,
}

pub fn api_schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}

pub fn api_schema(ctx: ApiSchemaContext) -> ApiSchema {
    api_schema_builder().data(ctx).finish()
}

pub fn ctx_data<'a>(ctx: &'a Context) -> &'a ApiSchemaContext {
    ctx.data::<ApiSchemaContext>()
        .expect("Failed to get API context")
}

/// HTTP routes: `POST /graphql` executes requests, `GET /graphql` serves
/// GraphiQL when `playground` is set, and `GET /` is a readiness probe.
pub fn axum_router(api_schema: ApiSchema, playground: bool) -> Router<()> {
    let graphql_route = if playground {
        get(graphiql_route).post_service(GraphQL::new(api_schema))
    } else {
        post_service(GraphQL::new(api_schema))
    };

    Router::new()
        .route("/", get(|| async { "Ready to roll!" }))
        .route("/graphql", graphql_route)
}

async fn graphiql_route() -> impl IntoResponse {
    axum::response::Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

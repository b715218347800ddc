//! HTTP routes.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::Html;
use axum::routing::get;

use crate::schema::TodoSchema;
use crate::sse;
use crate::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Build the API router: GraphQL (POST), GraphiQL (GET), health and events.
pub fn api_router(schema: TodoSchema) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(GRAPHQL_PATH, get(graphiql).post_service(GraphQL::new(schema)))
        .route("/events", get(sse::events_handler))
}

async fn health() -> &'static str {
    "ok"
}

/// GET /graphql - interactive GraphiQL page.
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

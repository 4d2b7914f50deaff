use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::{FromRequest, Request, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};

use crate::config::ServerSettings;
use crate::error::Result;

use super::schema::SocialSchema;

#[derive(Clone)]
struct ServerState {
    schema: SocialSchema,
    /// Rendered GraphiQL page, when enabled.
    graphiql: Option<Arc<str>>,
}

async fn graphql_handler(
    State(state): State<ServerState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// `GET <path>?query=...` executes like a POST. Without a query string the
/// GraphiQL page is served, if enabled.
async fn graphql_get(State(state): State<ServerState>, req: Request) -> Response {
    if req.uri().query().is_none() {
        if let Some(page) = &state.graphiql {
            return Html(page.to_string()).into_response();
        }
    }

    match <GraphQLRequest as FromRequest<ServerState>>::from_request(req, &state).await {
        Ok(gql) => graphql_handler(State(state), gql).await.into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Routes: `POST <path>` and `GET <path>?query=...` for GraphQL, bare
/// `GET <path>` for GraphiQL when enabled, and `GET /health`.
pub fn router(schema: SocialSchema, settings: &ServerSettings) -> Router {
    let graphiql = settings
        .graphiql
        .then(|| Arc::from(GraphiQLSource::build().endpoint(&settings.path).finish()));

    Router::new()
        .route(&settings.path, post(graphql_handler).get(graphql_get))
        .route("/health", get(health))
        .with_state(ServerState { schema, graphiql })
}

pub async fn run_server(schema: SocialSchema, settings: &ServerSettings) -> Result<()> {
    let app = router(schema, settings);
    let listener = tokio::net::TcpListener::bind(settings.bind_address()).await?;
    let addr = listener.local_addr()?;

    tracing::info!(
        graphiql = settings.graphiql,
        "GraphQL server ready at http://{}{}",
        addr,
        settings.path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}

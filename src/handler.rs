use crate::response::json_response;
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use lambda_runtime::{tracing, Error, LambdaEvent};
use model::env::TABLE_NAME;
use model::{GatewayEvent, MalformedPayload, Movie, Payload, RequestContext};
use std::env;
use std::fmt::{Display, Formatter};
use store::{MovieStore, StoreError};

/// Handle one gateway event: log the caller context, derive the record,
/// write it, respond.
///
/// Both outcomes are `Ok` responses. Input and storage failures surface to
/// the caller as a generic 500 while the invocation itself succeeds.
pub(crate) async fn function_handler(
    store: &dyn MovieStore,
    event: LambdaEvent<GatewayEvent>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let (event, context) = event.into_parts();
    let request_context: &RequestContext = &event.request_context;

    tracing::info!(
        request_id = %context.request_id,
        source_ip = ?request_context.identity.source_ip,
        user_agent = ?request_context.identity.user_agent,
        http_method = ?request_context.http_method,
        resource_path = ?request_context.resource_path,
        "Request received"
    );

    let response: ApiGatewayProxyResponse =
        match process_event(store, &context.request_id, event.body.as_deref()).await {
            Ok(()) => json_response(200, "Successfully inserted data!"),
            Err(err) => {
                tracing::error!(
                    request_id = %context.request_id,
                    error_type = err.kind(),
                    error_message = %err,
                    "Error processing request"
                );

                json_response(500, "Internal server error")
            }
        };

    Ok(response)
}

/// The fallible pipeline behind the handler's single error boundary: read
/// configuration, derive the record, write it.
async fn process_event(
    store: &dyn MovieStore,
    request_id: &str,
    body: Option<&str>,
) -> Result<(), HandlerError> {
    // Read per invocation, never cached; unset flows through to the write
    let table_name: Option<String> = env::var(TABLE_NAME).ok();

    let movie: Movie = match body {
        Some(raw) if !raw.is_empty() => {
            let payload: Payload = Payload::parse(raw)?;

            // Logged once the body parses, before the keys are read
            tracing::info!(request_id, "Processing request with payload");

            payload.into_movie()?
        }
        _ => {
            tracing::info!(
                request_id,
                "Processing request without payload, using default values"
            );

            Movie::fallback()
        }
    };

    store.put_movie(table_name.as_deref(), &movie).await?;

    tracing::info!(request_id, table = ?table_name, "Successfully inserted data");

    Ok(())
}

/// Failures collapsed by the error boundary. The kind survives only in the
/// error log; callers see one generic failure.
#[derive(Debug)]
enum HandlerError {
    Payload(MalformedPayload),
    Store(StoreError),
}

impl HandlerError {
    fn kind(&self) -> &'static str {
        match self {
            HandlerError::Payload(MalformedPayload::InvalidJson(_)) => "InvalidJson",
            HandlerError::Payload(MalformedPayload::MissingKey(_)) => "MissingKey",
            HandlerError::Store(_) => "StoreError",
        }
    }
}

impl From<MalformedPayload> for HandlerError {
    fn from(value: MalformedPayload) -> Self {
        HandlerError::Payload(value)
    }
}

impl From<StoreError> for HandlerError {
    fn from(value: StoreError) -> Self {
        HandlerError::Store(value)
    }
}

impl Display for HandlerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::Payload(err) => Display::fmt(err, f),
            HandlerError::Store(err) => Display::fmt(err, f),
        }
    }
}

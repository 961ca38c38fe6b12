use crate::handler::function_handler;
use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use model::GatewayEvent;
use store_dynamodb::DynamoDbMovieStore;

mod handler;
mod response;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // One client handle for the lifetime of the execution environment
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store: DynamoDbMovieStore = DynamoDbMovieStore::new(aws_sdk_dynamodb::Client::new(&config));

    run(service_fn(|event: LambdaEvent<GatewayEvent>| {
        function_handler(&store, event)
    }))
    .await
}

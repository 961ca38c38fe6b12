use async_trait::async_trait;
use aws_sdk_dynamodb::operation::put_item::PutItemOutput;
use aws_smithy_mocks::{mock, mock_client, Rule};
use model::env::TABLE_NAME;
use model::{GatewayEvent, Movie};
use serde_json::Value;
use std::env;
use store::StoreErrorReason::BackendFailure;
use store::StoreOperation::PutMovie;
use store::{MovieStore, StoreError};

/// Table name used across tests
pub const TEST_TABLE: &str = "movies-test";

/// Point the handler at the test table
pub fn setup_default_env() {
    unsafe {
        env::set_var(TABLE_NAME, TEST_TABLE);
    }
}

/// Remove the table variable so the write path sees no table reference
pub fn clear_env() {
    unsafe {
        env::remove_var(TABLE_NAME);
    }
}

/// Create a gateway event carrying just a body
pub fn gateway_event(body: Option<&str>) -> GatewayEvent {
    GatewayEvent {
        body: body.map(String::from),
        ..Default::default()
    }
}

/// Deserialize a gateway event from its raw wire form
pub fn event_from_json(value: Value) -> GatewayEvent {
    serde_json::from_value(value).expect("gateway event should deserialize")
}

/// A default mock DynamoDB client which accepts every put
pub fn create_mock_dynamodb_client() -> aws_sdk_dynamodb::Client {
    let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .repeatedly()
        .build();

    mock_client!(aws_sdk_dynamodb, [&put_item_rule])
}

/// Store double whose writes always fail, for exercising the error path.
#[derive(Default)]
pub struct FailingMovieStore;

#[async_trait]
impl MovieStore for FailingMovieStore {
    async fn put_movie(&self, _table_name: Option<&str>, movie: &Movie) -> Result<(), StoreError> {
        Err(StoreError::new(
            movie.id.clone(),
            PutMovie,
            BackendFailure("simulated table failure".into()),
        ))
    }
}

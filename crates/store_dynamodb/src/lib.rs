use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use model::Movie;
use std::collections::HashMap;
use store::StoreErrorReason::BackendFailure;
use store::StoreOperation::PutMovie;
use store::{MovieStore, StoreError};

const YEAR: &str = "year";
const TITLE: &str = "title";
const ID: &str = "id";

/// Movie table backed by DynamoDB.
///
/// The client handle is built once at process start and reused across
/// invocations; the table name arrives with each call.
pub struct DynamoDbMovieStore {
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl DynamoDbMovieStore {
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client) -> Self {
        DynamoDbMovieStore { dynamodb_client }
    }
}

#[async_trait]
impl MovieStore for DynamoDbMovieStore {
    async fn put_movie(&self, table_name: Option<&str>, movie: &Movie) -> Result<(), StoreError> {
        // An absent table name is handed to the SDK as-is and fails there
        self.dynamodb_client
            .put_item()
            .set_table_name(table_name.map(String::from))
            .set_item(Some(movie_item(movie)))
            .send()
            .await
            .map_err(|err| {
                StoreError::new(movie.id.clone(), PutMovie, BackendFailure(err.into()))
            })?;

        Ok(())
    }
}

/// Attribute map matching the table's schema: `year` is numeric-as-text,
/// `title` and `id` are strings.
fn movie_item(movie: &Movie) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (YEAR.to_string(), AttributeValue::N(movie.year.clone())),
        (TITLE.to_string(), AttributeValue::S(movie.title.clone())),
        (ID.to_string(), AttributeValue::S(movie.id.clone())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
    use aws_sdk_dynamodb::types::error::ResourceNotFoundException;
    use aws_smithy_mocks::{mock, mock_client, Rule};
    use store::{StoreErrorReason, StoreOperation};

    fn test_movie() -> Movie {
        Movie {
            year: "1999".to_string(),
            title: "The Matrix".to_string(),
            id: "abc".to_string(),
        }
    }

    #[test]
    fn movie_item_types_year_as_number() {
        let item: HashMap<String, AttributeValue> = movie_item(&test_movie());

        assert_eq!(Some(&AttributeValue::N("1999".to_string())), item.get(YEAR));
        assert_eq!(
            Some(&AttributeValue::S("The Matrix".to_string())),
            item.get(TITLE)
        );
        assert_eq!(Some(&AttributeValue::S("abc".to_string())), item.get(ID));
    }

    #[tokio::test]
    async fn put_movie_writes_typed_item_to_named_table() {
        let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
            .match_requests(|input| {
                input.table_name() == Some("movies-test")
                    && input.item().is_some_and(|item| {
                        item.get(YEAR) == Some(&AttributeValue::N("1999".to_string()))
                            && item.get(ID) == Some(&AttributeValue::S("abc".to_string()))
                    })
            })
            .then_output(|| PutItemOutput::builder().build());

        let store = DynamoDbMovieStore::new(mock_client!(aws_sdk_dynamodb, [&put_item_rule]));

        store
            .put_movie(Some("movies-test"), &test_movie())
            .await
            .expect("write should succeed");

        assert_eq!(1, put_item_rule.num_calls());
    }

    #[tokio::test]
    async fn absent_table_reference_fails_in_the_backend() {
        let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
            .then_output(|| PutItemOutput::builder().build());

        let store = DynamoDbMovieStore::new(mock_client!(aws_sdk_dynamodb, [&put_item_rule]));

        let err: StoreError = store
            .put_movie(None, &test_movie())
            .await
            .expect_err("write should fail without a table");

        assert_eq!("abc", err.movie_id);
        assert!(matches!(err.reason, StoreErrorReason::BackendFailure(_)));
        // The call fails client-side; nothing reaches the table service
        assert_eq!(0, put_item_rule.num_calls());
    }

    #[tokio::test]
    async fn backend_failure_surfaces_with_record_id() {
        let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item).then_error(|| {
            PutItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            )
        });

        let store = DynamoDbMovieStore::new(mock_client!(aws_sdk_dynamodb, [&put_item_rule]));

        let err: StoreError = store
            .put_movie(Some("movies-test"), &test_movie())
            .await
            .expect_err("write should fail");

        assert_eq!("abc", err.movie_id);
        assert!(matches!(err.operation, StoreOperation::PutMovie));
        assert!(matches!(err.reason, StoreErrorReason::BackendFailure(_)));
    }
}

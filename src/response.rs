use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};
use serde_json::json;

/// Build the fixed-shape gateway response: a status code and a one-field
/// JSON body under the JSON content type.
pub(crate) fn json_response(status_code: i64, message: &str) -> ApiGatewayProxyResponse {
    let mut headers: HeaderMap = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    ApiGatewayProxyResponse {
        status_code,
        headers,
        multi_value_headers: HeaderMap::new(),
        body: Some(Body::Text(json!({ "message": message }).to_string())),
        is_base64_encoded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn response_serializes_to_the_gateway_contract() {
        let response: Value =
            serde_json::to_value(json_response(200, "Successfully inserted data!"))
                .expect("response should serialize");

        assert_eq!(200, response["statusCode"]);
        assert_eq!("application/json", response["headers"]["content-type"]);
        assert_eq!(
            "{\"message\":\"Successfully inserted data!\"}",
            response["body"]
        );
    }

    #[test]
    fn error_response_shares_the_same_shape() {
        let response: Value = serde_json::to_value(json_response(500, "Internal server error"))
            .expect("response should serialize");

        assert_eq!(500, response["statusCode"]);
        assert_eq!("{\"message\":\"Internal server error\"}", response["body"]);
    }
}

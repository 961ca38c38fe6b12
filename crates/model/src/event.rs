use serde::Deserialize;

/// HTTP request envelope delivered by the API gateway trigger.
///
/// Every field is optional and defaulted so a bare `{}` test event
/// deserializes cleanly; fields the gateway sends beyond these are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayEvent {
    pub request_context: RequestContext,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    pub identity: RequestIdentity,
    pub http_method: Option<String>,
    pub resource_path: Option<String>,
}

/// Caller details recorded for observability only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestIdentity {
    pub source_ip: Option<String>,
    pub user_agent: Option<String>,
}

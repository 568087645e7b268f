use utoipa::OpenApi;

/// Path of the generated OpenAPI document when the docs are enabled.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI Specification Documentation
///
/// Describes the two probe endpoints. Only served when
/// `UPTIME_SWAGGER_UI` is enabled.
///
/// # Endpoints
/// - Liveness: `GET /`
/// - Status: `GET /status`
///
/// # Schemas
/// - `StatusResponse`: status payload
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::alive,
        crate::routes::status::status,
    ),
    components(
        schemas(
            crate::models::status::StatusResponse
        )
    ),
    tags(
        (name = "Uptime", description = "Endpoints polled by external uptime monitors")
    ),
    info(
        description = "Liveness probe that keeps a bot process awake",
        title = "Uptime Probe",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_probe_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/status"));

        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("StatusResponse"));
    }
}

#![allow(clippy::unwrap_used)]
// Integration tests for `SiteWhereClient` using wiremock.

use std::collections::BTreeMap;
use std::time::Duration;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use wiremock::matchers::{body_bytes, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sitewhere_api::model::{
    CustomerCreateRequest, DeviceAssignmentCreateRequest, DeviceAssignmentStatus,
    DeviceCreateRequest, DeviceGroupElementCreateRequest, DeviceMeasurementCreateRequest,
};
use sitewhere_api::{
    ClientConfig, Credentials, DateRangeSearchCriteria, DefaultTenant, DeviceListOptions, Error,
    ErrorKind, SearchCriteria, SiteWhereClient, TenantAuthentication, TenantId, TransportConfig,
    collect_all_pages,
};

// ── Helpers ─────────────────────────────────────────────────────────

const BASIC_ADMIN: &str = "Basic YWRtaW46cGFzc3dvcmQ=";

async fn setup() -> (MockServer, SiteWhereClient) {
    let server = MockServer::start().await;
    let client = SiteWhereClient::with_client(reqwest::Client::new(), &server.uri())
        .unwrap()
        .with_credentials(Credentials::new("admin", "password"));
    (server, client)
}

fn api(suffix: &str) -> String {
    format!("/sitewhere/api/{suffix}")
}

fn tenant() -> TenantAuthentication {
    TenantAuthentication::new(
        SecretString::from("jwt-1".to_owned()),
        "default",
        "sitewhere1234567890",
    )
}

fn customer_json(token: &str, deleted: bool) -> serde_json::Value {
    json!({
        "id": "5f0c1d2e-0000-4000-8000-000000000001",
        "token": token,
        "createdDate": "2024-04-01T09:00:00Z",
        "createdBy": "admin",
        "deleted": deleted,
        "metadata": {},
        "customerTypeToken": "retail",
        "name": "Acme Stores"
    })
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_get_token_reads_jwt_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("jwt")))
        .and(header("authorization", BASIC_ADMIN))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Sitewhere-JWT", "eyJhbGciOi.abc"))
        .expect(1)
        .mount(&server)
        .await;

    let token = client.get_token().await.unwrap();
    assert_eq!(token.expose_secret(), "eyJhbGciOi.abc");
}

#[tokio::test]
async fn test_get_token_bad_credentials() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("jwt")))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = client.get_token().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
    assert!(err.is_auth_expired());
}

#[tokio::test]
async fn test_get_token_missing_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("jwt")))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = client.get_token().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_get_token_without_credentials_sends_nothing() {
    let server = MockServer::start().await;
    let client = SiteWhereClient::with_client(reqwest::Client::new(), &server.uri()).unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.get_token().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
}

#[tokio::test]
async fn test_tenant_call_sends_bearer_and_tenant_headers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("customers/acme")))
        .and(header("authorization", "Bearer jwt-1"))
        .and(header("x-sitewhere-tenant-id", "default"))
        .and(header("x-sitewhere-tenant-auth", "sitewhere1234567890"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("acme", false)))
        .expect(1)
        .mount(&server)
        .await;

    let customer = client
        .get_customer_by_token(Some(&tenant()), "acme")
        .await
        .unwrap();
    assert_eq!(customer.entity.token, "acme");
    assert_eq!(customer.customer_type_token, "retail");
}

#[tokio::test]
async fn test_unscoped_call_uses_basic_and_default_tenant() {
    let (server, client) = setup().await;
    let client = client.with_default_tenant(DefaultTenant {
        tenant_id: TenantId::new("default"),
        tenant_auth_token: SecretString::from("sitewhere1234567890".to_owned()),
    });

    Mock::given(method("GET"))
        .and(path(api("customers/acme")))
        .and(header("authorization", BASIC_ADMIN))
        .and(header("x-sitewhere-tenant-id", "default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("acme", false)))
        .expect(1)
        .mount(&server)
        .await;

    client.get_customer_by_token(None, "acme").await.unwrap();
}

#[tokio::test]
async fn test_expired_jwt_surfaces_as_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("customers/acme")))
        .respond_with(
            ResponseTemplate::new(401).insert_header("X-SiteWhere-Error", "JWT expired"),
        )
        .mount(&server)
        .await;

    let err = client
        .get_customer_by_token(Some(&tenant()), "acme")
        .await
        .unwrap_err();
    assert!(err.is_auth_expired());
    assert!(err.to_string().contains("JWT expired"));
}

// ── Resource lifecycle ──────────────────────────────────────────────

#[tokio::test]
async fn test_create_then_get_customer() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api("customers")))
        .and(body_json(json!({
            "token": "acme",
            "customerTypeToken": "retail",
            "name": "Acme Stores",
            "metadata": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("acme", false)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api("customers/acme")))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("acme", false)))
        .mount(&server)
        .await;

    let request = CustomerCreateRequest {
        token: Some("acme".into()),
        customer_type_token: "retail".into(),
        name: "Acme Stores".into(),
        ..CustomerCreateRequest::default()
    };
    let created = client
        .create_customer(Some(&tenant()), &request)
        .await
        .unwrap();
    let fetched = client
        .get_customer_by_token(Some(&tenant()), &created.entity.token)
        .await
        .unwrap();

    assert_eq!(created, fetched);
    assert!(!fetched.entity.deleted);
}

#[tokio::test]
async fn test_soft_delete_then_permanent_delete() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(api("customers/acme")))
        .and(query_param("force", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("acme", true)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(api("customers/acme")))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("acme", true)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api("customers/acme")))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Customer token not found." })),
        )
        .mount(&server)
        .await;

    let soft = client
        .delete_customer(Some(&tenant()), "acme", false)
        .await
        .unwrap();
    assert!(soft.entity.deleted);

    client
        .delete_customer(Some(&tenant()), "acme", true)
        .await
        .unwrap();

    let err = client
        .get_customer_by_token(Some(&tenant()), "acme")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("Customer token not found."));
}

#[tokio::test]
async fn test_list_devices_sends_options_and_reports_total() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("devices")))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "2"))
        .and(query_param("includeDeleted", "true"))
        .and(query_param("excludeAssigned", "true"))
        .and(query_param("includeDeviceType", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numResults": 7,
            "results": [
                { "token": "dev-1", "deviceTypeToken": "rpi4", "metadata": {} },
                { "token": "dev-2", "deviceTypeToken": "rpi4", "metadata": {}, "deleted": true }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = DeviceListOptions {
        include_deleted: true,
        exclude_assigned: true,
        ..DeviceListOptions::default()
    };
    let page = client
        .list_devices(Some(&tenant()), options, &DateRangeSearchCriteria::new(1, 2))
        .await
        .unwrap();

    assert_eq!(page.num_results, 7);
    assert_eq!(page.len(), 2);
    assert_eq!(page.results[1].token(), "dev-2");
    assert!(page.results[1].entity.deleted);
}

#[tokio::test]
async fn test_collect_all_pages_walks_area_types() {
    let (server, client) = setup().await;

    for (page, tokens) in [("1", vec!["building", "floor"]), ("2", vec!["room"])] {
        let results: Vec<_> = tokens
            .iter()
            .map(|t| json!({ "token": t, "name": t, "metadata": {} }))
            .collect();
        Mock::given(method("GET"))
            .and(path(api("areatypes")))
            .and(query_param("page", page))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "numResults": 3, "results": results })),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let tenant = tenant();
    let all = collect_all_pages(SearchCriteria::new(1, 2), |criteria| {
        let client = &client;
        let tenant = &tenant;
        async move { client.list_area_types(Some(tenant), &criteria).await }
    })
    .await
    .unwrap();

    let tokens: Vec<_> = all.iter().map(|t| t.entity.token.as_str()).collect();
    assert_eq!(tokens, vec!["building", "floor", "room"]);
}

#[tokio::test]
#[allow(deprecated)]
async fn test_hardware_id_aliases_use_device_endpoint() {
    let (server, client) = setup().await;
    let device = json!({ "token": "hw-0042", "deviceTypeToken": "rpi4", "metadata": {} });

    Mock::given(method("GET"))
        .and(path(api("devices/hw-0042")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&device))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(api("devices/hw-0042")))
        .and(body_json(json!({
            "deviceTypeToken": "rpi4",
            "comments": "moved to rack 2",
            "deviceElementMappings": [],
            "metadata": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&device))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(api("devices/hw-0042")))
        .and(query_param("force", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&device))
        .expect(1)
        .mount(&server)
        .await;

    let fetched = client
        .get_device_by_hardware_id(Some(&tenant()), "hw-0042")
        .await
        .unwrap();
    assert_eq!(fetched.token(), "hw-0042");

    let request = DeviceCreateRequest {
        device_type_token: "rpi4".into(),
        comments: Some("moved to rack 2".into()),
        ..DeviceCreateRequest::default()
    };
    client
        .update_device_by_hardware_id(Some(&tenant()), "hw-0042", &request)
        .await
        .unwrap();

    client
        .delete_device_by_hardware_id(Some(&tenant()), "hw-0042", false)
        .await
        .unwrap();
}

// ── Assignments ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_second_active_assignment_is_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api("assignments")))
        .respond_with(
            ResponseTemplate::new(409)
                .insert_header("X-SiteWhere-Error", "Device is already assigned.")
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let request = DeviceAssignmentCreateRequest {
        device_token: "dev-1".into(),
        ..DeviceAssignmentCreateRequest::default()
    };
    let err = client
        .create_device_assignment(Some(&tenant()), &request)
        .await
        .unwrap_err();

    match err {
        Error::Validation { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Device is already assigned.");
        }
        other => panic!("expected Validation error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_release_assignment_posts_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api("assignments/assn-1/end")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "assn-1",
            "deviceToken": "dev-1",
            "status": "Released",
            "releasedDate": "2024-05-03T10:00:00Z",
            "metadata": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let released = client
        .release_device_assignment(Some(&tenant()), "assn-1")
        .await
        .unwrap();
    assert!(!released.is_active());
    assert!(released.released_date.is_some());
}

#[tokio::test]
async fn test_assignment_metadata_is_wrapped() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(api("assignments/assn-1/metadata")))
        .and(body_json(json!({ "metadata": { "rack": "B4" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "assn-1",
            "deviceToken": "dev-1",
            "status": "Active",
            "metadata": { "rack": "B4" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let metadata = BTreeMap::from([("rack".to_owned(), "B4".to_owned())]);
    let updated = client
        .update_device_assignment_metadata(Some(&tenant()), "assn-1", &metadata)
        .await
        .unwrap();
    assert_eq!(updated.entity.metadata, metadata);
}

#[tokio::test]
async fn test_assignments_for_asset_filter_by_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("assets/forklift-7/assignments")))
        .and(query_param("status", "Missing"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numResults": 1,
            "results": [{
                "token": "assn-9",
                "metadata": {},
                "deviceToken": "dev-9",
                "assetToken": "forklift-7",
                "status": "Missing"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .list_assignments_for_asset(
            Some(&tenant()),
            "forklift-7",
            Some(DeviceAssignmentStatus::Missing),
            &SearchCriteria::new(1, 10),
        )
        .await
        .unwrap();
    assert_eq!(page.num_results, 1);
    assert_eq!(page.results[0].status, DeviceAssignmentStatus::Missing);
    assert!(!page.results[0].is_active());
}

// ── Events ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_measurement_create_and_date_range_list() {
    let (server, client) = setup().await;

    let stored = json!({
        "id": "evt-1",
        "eventType": "Measurement",
        "deviceAssignmentToken": "assn-1",
        "eventDate": "2024-06-01T12:00:00Z",
        "metadata": {},
        "name": "engine.temp",
        "value": 81.5
    });

    Mock::given(method("POST"))
        .and(path(api("assignments/assn-1/measurements")))
        .and(body_json(json!({
            "updateState": false,
            "metadata": {},
            "name": "engine.temp",
            "value": 81.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&stored))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api("assignments/assn-1/measurements")))
        .and(query_param("startDate", "2024-06-01T00:00:00.000Z"))
        .and(query_param("endDate", "2024-06-02T00:00:00.000Z"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "numResults": 1, "results": [stored] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_device_measurement(
            Some(&tenant()),
            "assn-1",
            &DeviceMeasurementCreateRequest::new("engine.temp", 81.5),
        )
        .await
        .unwrap();
    assert_eq!(created.measurement.name, "engine.temp");

    let criteria = DateRangeSearchCriteria::default()
        .with_range(
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
            Some(Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap()),
        )
        .unwrap();
    let page = client
        .list_device_measurements(Some(&tenant()), "assn-1", &criteria)
        .await
        .unwrap();
    assert_eq!(page.results, vec![created]);
}

// ── Streams ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_stream_chunk_round_trip() {
    let (server, client) = setup().await;
    let chunk = Bytes::from_static(&[0x00, 0x01, 0xfe, 0xff, 0x42]);

    Mock::given(method("POST"))
        .and(path(api("assignments/A1/streams/S1/data/3")))
        .and(header("content-type", "application/octet-stream"))
        .and(body_bytes(chunk.to_vec()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api("assignments/A1/streams/S1/data/3")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(chunk.to_vec()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api("assignments/A1/streams/S1/data/999")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    client
        .add_device_stream_data(Some(&tenant()), "A1", "S1", 3, chunk.clone())
        .await
        .unwrap();

    let fetched = client
        .get_device_stream_data(Some(&tenant()), "A1", "S1", 3)
        .await
        .unwrap();
    assert_eq!(fetched, chunk);

    let err = client
        .get_device_stream_data(Some(&tenant()), "A1", "S1", 999)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_stream_listings_send_date_window() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("assignments/A1/streams")))
        .and(query_param("startDate", "2024-06-01T00:00:00.000Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numResults": 0,
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api("assignments/A1/streams/S1/data")))
        .and(query_param("startDate", "2024-06-01T00:00:00.000Z"))
        .and(query_param("endDate", "2024-06-01T06:00:00.000Z"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3, 4]))
        .expect(1)
        .mount(&server)
        .await;

    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 6, 1, 6, 0, 0).unwrap();

    let open_ended = DateRangeSearchCriteria::default()
        .with_range(Some(start), None)
        .unwrap();
    let streams = client
        .list_device_streams(Some(&tenant()), "A1", &open_ended)
        .await
        .unwrap();
    assert!(streams.is_empty());

    let window = DateRangeSearchCriteria::default()
        .with_range(Some(start), Some(end))
        .unwrap();
    let data = client
        .list_device_stream_data(Some(&tenant()), "A1", "S1", &window)
        .await
        .unwrap();
    assert_eq!(data, Bytes::from_static(&[1, 2, 3, 4]));
}

// ── Groups ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_group_elements_sends_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(api("devicegroups/grp-1/elements")))
        .and(body_json(json!([{ "deviceToken": "dev-1", "roles": [] }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numResults": 1,
            "results": [{ "groupToken": "grp-1", "deviceToken": "dev-1" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let removed = client
        .delete_device_group_elements(
            Some(&tenant()),
            "grp-1",
            &[DeviceGroupElementCreateRequest::device("dev-1")],
        )
        .await
        .unwrap();
    assert_eq!(removed.results[0].device_token.as_deref(), Some("dev-1"));
}

// ── Batch operations ────────────────────────────────────────────────

#[tokio::test]
async fn test_batch_command_returns_pending_operation() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api("batch/command")))
        .and(body_json(json!({
            "token": "B1",
            "commandToken": "C1",
            "parameterValues": { "x": "1" },
            "hardwareIds": ["hw1", "hw2"],
            "metadata": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "B1",
            "operationType": "InvokeCommand",
            "parameters": { "x": "1" },
            "processingStatus": "Unprocessed",
            "metadata": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let parameters = BTreeMap::from([("x".to_owned(), "1".to_owned())]);
    let operation = client
        .create_batch_command_invocation(
            Some(&tenant()),
            Some("B1"),
            "C1",
            &parameters,
            &["hw1".to_owned(), "hw2".to_owned()],
        )
        .await
        .unwrap();

    assert_eq!(operation.entity.token, "B1");
    assert!(operation.processing_status.is_pending());
}

#[tokio::test]
async fn test_batch_command_without_targets_is_rejected_locally() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .create_batch_command_invocation(Some(&tenant()), None, "C1", &BTreeMap::new(), &[])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("system/version")))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client.get_version().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedServerError);
    assert_eq!(err.status(), Some(503));
    assert!(err.is_transient());
    match err {
        Error::Server { body, .. } => assert_eq!(body, "maintenance"),
        other => panic!("expected Server error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("system/version")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client.get_version().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportError);
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "<html>proxy</html>"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_version() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api("system/version")))
        .and(header("authorization", BASIC_ADMIN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "edition": "Community Edition",
            "editionIdentifier": "CE",
            "versionIdentifier": "2.1.0",
            "gitRevision": "a1b2c3d"
        })))
        .mount(&server)
        .await;

    let version = client.get_version().await.unwrap();
    assert_eq!(version.version_identifier, "2.1.0");
    assert_eq!(version.build_timestamp, None);
}

// ── Timeouts ────────────────────────────────────────────────────────

fn slow_version() -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(json!({ "versionIdentifier": "2.1.0" }))
        .set_delay(Duration::from_secs(2))
}

#[tokio::test]
async fn test_configured_timeout_is_reported_with_its_duration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("system/version")))
        .respond_with(slow_version())
        .mount(&server)
        .await;

    let config = ClientConfig::new(reqwest::Url::parse(&server.uri()).unwrap()).with_transport(
        TransportConfig::default().with_timeout(Duration::from_millis(200)),
    );
    let client = SiteWhereClient::new(config).unwrap();

    let err = client.get_version().await.unwrap_err();
    match &err {
        Error::Timeout { timeout } => assert_eq!(*timeout, Duration::from_millis(200)),
        other => panic!("expected Timeout error, got: {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_wrapped_client_timeout_stays_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api("system/version")))
        .respond_with(slow_version())
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = SiteWhereClient::with_client(http, &server.uri()).unwrap();

    let err = client.get_version().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.is_transient());
}

// sipinjam-client/tests/api_integration.rs
// API 集成测试 (httpmock)

use httpmock::prelude::*;
use serde_json::json;
use shared::models::{
    AvailabilityRequest, BookingAction, BookingExportQuery, BookingQuery, BookingStatus, BuildingForm, BuildingQuery,
    TransactionExportQuery,
};
use sipinjam_client::{ClientConfig, ClientError, Session, SipinjamClient};

fn client_for(server: &MockServer, session: Session) -> SipinjamClient {
    SipinjamClient::new(ClientConfig::new(server.base_url()).with_timeout(5), session).unwrap()
}

fn aula() -> serde_json::Value {
    json!({
        "_id": "g-1",
        "name": "Aula Barat",
        "type": "AULA",
        "capacity": 300,
        "price": 1500000,
        "facilities": [{"id": "f-ac", "name": "AC"}, "f-proyektor"]
    })
}

#[tokio::test]
async fn test_list_buildings_sends_filters_and_reads_meta() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/gedung")
            .query_param("page", "2")
            .query_param("limit", "10")
            .query_param("search", "aula")
            .query_param("type", "AULA");
        then.status(200).json_body(json!({
            "data": [aula()],
            "meta": {"currentPage": 2, "perPage": 10, "totalItems": 11, "totalPages": 2}
        }));
    });

    let client = client_for(&server, Session::anonymous());
    let mut query = BuildingQuery::new(2, 10);
    query.search = Some("aula".into());
    query.building_type = Some("AULA".into());
    let page = client.buildings().list(&query).await.unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Aula Barat");
    assert_eq!(page.items[0].facilities[1].id(), "f-proyektor");
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.total, 11);
    assert_eq!(page.meta.total_pages, 2);
}

#[tokio::test]
async fn test_availability_posts_wire_date() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/gedung/check-availability")
            .json_body(json!({"date": "25-12-2024", "time": "08:00"}));
        then.status(200).json_body(json!([aula()]));
    });

    let client = client_for(&server, Session::anonymous());
    let request = AvailabilityRequest::from_input("2024-12-25", "08:00").unwrap();
    let buildings = client.buildings().check_availability(&request).await.unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(buildings.len(), 1);
    assert_eq!(buildings[0].id, "g-1");
}

#[tokio::test]
async fn test_availability_response_shapes() {
    let request = AvailabilityRequest::from_input("2024-12-25", "13:30").unwrap();

    for (body, expected) in [
        (json!({"data": [aula()]}), 1),
        (json!({"data": {"buildings": [aula(), aula()]}}), 2),
        (json!({"message": "Tidak ada gedung tersedia"}), 0),
        (json!({"data": null}), 0),
    ] {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/gedung/check-availability");
            then.status(200).json_body(body.clone());
        });
        let client = client_for(&server, Session::anonymous());
        let buildings = client.buildings().check_availability(&request).await.unwrap();
        assert_eq!(buildings.len(), expected, "body: {body}");
    }
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/auth/me")
            .header("authorization", "Bearer tok-123");
        then.status(200).json_body(json!({
            "data": {"id": "u-1", "name": "Admin Kampus", "email": "admin@kampus.ac.id", "role": "ADMIN"}
        }));
    });

    let client = client_for(&server, Session::with_token("tok-123"));
    let me = client.auth().me().await.unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(me.email, "admin@kampus.ac.id");
    assert!(me.role.is_staff());
}

#[tokio::test]
async fn test_login_returns_session() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth/login")
            .json_body(json!({"email": "hmif@kampus.ac.id", "password": "rahasia"}));
        then.status(200).json_body(json!({
            "data": {
                "token": "jwt-abc",
                "user": {"id": "u-2", "name": "HMIF", "email": "hmif@kampus.ac.id", "role": "BORROWER", "borrowerType": "INTERNAL"}
            }
        }));
    });

    let client = client_for(&server, Session::anonymous());
    let session = client.auth().login("hmif@kampus.ac.id", "rahasia").await.unwrap();

    assert_eq!(session.token(), Some("jwt-abc"));
    assert_eq!(session.user().map(|u| u.name.as_str()), Some("HMIF"));
    assert!(client.with_session(session).session().is_authenticated());
}

#[tokio::test]
async fn test_error_message_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/bookings");
        then.status(409)
            .json_body(json!({"message": "Gedung sudah dipinjam pada waktu tersebut"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/bookings/me");
        then.status(401).json_body(json!({"error": "Token kedaluwarsa"}));
    });

    let client = client_for(&server, Session::with_token("old"));
    let form: shared::models::BookingForm = serde_json::from_value(json!({
        "buildingId": "g-1",
        "activity": "Seminar Nasional",
        "borrowerType": "INTERNAL",
        "startDate": "25-12-2024",
        "endDate": "25-12-2024",
        "startTime": "08:00",
        "endTime": "12:00"
    }))
    .unwrap();

    let err = client.bookings().create(&form, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(err.display_message(), "Gedung sudah dipinjam pada waktu tersebut");

    let err = client.bookings().mine(&BookingQuery::new(1, 10)).await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.display_message(), "Token kedaluwarsa");
}

#[tokio::test]
async fn test_create_building_multipart() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("aula.png");
    std::fs::write(&photo, [0x89, b'P', b'N', b'G']).unwrap();

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/gedung")
            .body_includes(r#"["f-ac","f-proyektor"]"#)
            .body_includes(r#"filename="aula.png""#);
        then.status(201).json_body(json!({"data": aula()}));
    });

    let client = client_for(&server, Session::with_token("tok"));
    let form = BuildingForm {
        name: "Aula Barat".into(),
        building_type: "AULA".into(),
        capacity: 300,
        price: 1_500_000.0,
        description: None,
        location: None,
        facilities: vec!["f-ac".into(), "f-proyektor".into()],
    };
    let created = client.buildings().create(&form, Some(&photo)).await.unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(created.id, "g-1");
}

#[tokio::test]
async fn test_reject_booking_sends_reason() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v1/bookings/bk-1/reject")
            .json_body(json!({"reason": "Jadwal bentrok"}));
        then.status(200).json_body(json!({
            "data": {
                "bookingId": "bk-1",
                "borrower": "HMIF",
                "building": "g-1",
                "activity": "Seminar Nasional",
                "startDate": "25-12-2024",
                "endDate": "25-12-2024",
                "startTime": "08:00",
                "endTime": "12:00",
                "status": "REJECTED",
                "reason": "Jadwal bentrok"
            }
        }));
    });

    let client = client_for(&server, Session::with_token("tok"));
    let booking = client.bookings().reject("bk-1", "Jadwal bentrok").await.unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(booking.status, BookingStatus::Rejected);
    assert!(BookingAction::available_for(&booking.status).is_empty());
}

#[tokio::test]
async fn test_export_uses_content_disposition() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/bookings/export")
            .query_param("status", "APPROVED")
            .query_param_missing("page")
            .query_param_missing("limit");
        then.status(200)
            .header(
                "content-type",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            )
            .header("content-disposition", r#"attachment; filename="peminjaman-desember.xlsx""#)
            .body([0x50, 0x4b, 0x03, 0x04]);
    });

    let client = client_for(&server, Session::with_token("tok"));
    let query = BookingExportQuery {
        status: Some("APPROVED".into()),
        search: None,
    };
    let download = client.bookings().export(&query).await.unwrap();
    assert_eq!(download.file_name, "peminjaman-desember.xlsx");
    assert_eq!(download.bytes, vec![0x50, 0x4b, 0x03, 0x04]);

    let dir = tempfile::tempdir().unwrap();
    let path = download.save_to(dir.path()).await.unwrap();
    assert_eq!(std::fs::read(path).unwrap().len(), 4);
}

#[tokio::test]
async fn test_transaction_export_sends_filters_without_paging() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/transactions/export")
            .query_param("paymentStatus", "PAID")
            .query_param("search", "INV")
            .query_param_missing("page")
            .query_param_missing("limit");
        then.status(200).body([0x50, 0x4b]);
    });

    let client = client_for(&server, Session::with_token("tok"));
    let query = TransactionExportQuery {
        payment_status: Some("PAID".into()),
        search: Some("INV".into()),
    };
    let download = client.transactions().export(&query).await.unwrap();
    assert_eq!(mock.calls(), 1);
    assert!(download.file_name.starts_with("transactions-"));
}

#[tokio::test]
async fn test_ids_are_sent_as_one_path_segment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/bookings/b%2F1%3Fx%3D2%23top");
        then.status(200).json_body(json!({"data": {
            "_id": "b/1?x=2#top",
            "id": "b/1?x=2#top",
            "borrower": "HMIF",
            "building": "g-1",
            "activityName": "Rapat",
            "startDate": "25-12-2024",
            "endDate": "25-12-2024",
            "startTime": "08:00",
            "endTime": "10:00",
            "status": "PROCESSING"
        }}));
    });

    let client = client_for(&server, Session::with_token("tok"));
    let booking = client.bookings().get("b/1?x=2#top").await.unwrap();
    assert_eq!(mock.calls(), 1);
    assert_eq!(booking.booking_id, "b/1?x=2#top");
    assert_eq!(booking.status, BookingStatus::Processing);
}

#[tokio::test]
async fn test_notifications_unread_and_mark_read() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/notifications");
        then.status(200).json_body(json!({"data": [
            {"id": "n-1", "type": "BOOKING", "message": "Peminjaman disetujui", "readStatus": false},
            {"id": "n-2", "type": "PAYMENT", "message": "Pembayaran diterima", "readStatus": true}
        ]}));
    });
    let mark = server.mock(|when, then| {
        when.method(PATCH).path("/api/v1/notifications/n-1/read");
        then.status(204);
    });

    let client = client_for(&server, Session::with_token("tok"));
    assert_eq!(client.notifications().unread_count().await.unwrap(), 1);
    client.notifications().mark_read("n-1").await.unwrap();
    assert_eq!(mark.calls(), 1);
}

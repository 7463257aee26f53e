use actix_middleware::{
    get_correlation_id,
    metrics::{HTTP_REQUESTS_TOTAL, UNMATCHED_ROUTE},
    CorrelationIdMiddleware, Logging, MetricsMiddleware, CORRELATION_ID_HEADER,
};
use actix_web::{test, web, App, HttpRequest, HttpResponse};

/// Echoes the correlation ID seen by the handler
async fn echo_handler(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().body(get_correlation_id(&req).unwrap_or_default())
}

async fn item_handler() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn failing_handler() -> HttpResponse {
    HttpResponse::InternalServerError().finish()
}

#[actix_web::test]
async fn test_correlation_id_is_reused() {
    let app = test::init_service(
        App::new()
            .wrap(CorrelationIdMiddleware)
            .route("/echo", web::get().to(echo_handler)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/echo")
        .insert_header((CORRELATION_ID_HEADER, "req-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(CORRELATION_ID_HEADER).unwrap(),
        "req-42"
    );
    let body = test::read_body(resp).await;
    assert_eq!(body, "req-42");
}

#[actix_web::test]
async fn test_correlation_id_is_generated() {
    let app = test::init_service(
        App::new()
            .wrap(CorrelationIdMiddleware)
            .route("/echo", web::get().to(echo_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/echo").to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
        .unwrap();
    assert_eq!(header.len(), 36); // UUID v4 string length

    let body = test::read_body(resp).await;
    assert_eq!(body, header.as_bytes());
}

#[actix_web::test]
async fn test_oversized_correlation_id_is_replaced() {
    let app = test::init_service(
        App::new()
            .wrap(CorrelationIdMiddleware)
            .route("/echo", web::get().to(echo_handler)),
    )
    .await;

    let oversized = "x".repeat(500);
    let req = test::TestRequest::get()
        .uri("/echo")
        .insert_header((CORRELATION_ID_HEADER, oversized.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp.headers().get(CORRELATION_ID_HEADER).unwrap();
    assert_eq!(header.len(), 36);
}

#[actix_web::test]
async fn test_metrics_count_by_route_pattern() {
    let app = test::init_service(
        App::new()
            .wrap(MetricsMiddleware)
            .wrap(Logging)
            .route("/items/{id}", web::get().to(item_handler))
            .route("/fail", web::get().to(failing_handler)),
    )
    .await;

    let before = HTTP_REQUESTS_TOTAL
        .with_label_values(&["GET", "/items/{id}", "200"])
        .get();

    for id in ["1", "2", "3"] {
        let req = test::TestRequest::get()
            .uri(&format!("/items/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let after = HTTP_REQUESTS_TOTAL
        .with_label_values(&["GET", "/items/{id}", "200"])
        .get();
    assert_eq!(after - before, 3);

    let req = test::TestRequest::get().uri("/fail").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
    assert!(
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/fail", "500"])
            .get()
            >= 1
    );
}

#[actix_web::test]
async fn test_unmatched_requests_share_one_series() {
    let app = test::init_service(
        App::new()
            .wrap(MetricsMiddleware)
            .route("/items/{id}", web::get().to(item_handler)),
    )
    .await;

    let before = HTTP_REQUESTS_TOTAL
        .with_label_values(&["GET", UNMATCHED_ROUTE, "404"])
        .get();

    for uri in ["/nope", "/also/not/here", "/items"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    let after = HTTP_REQUESTS_TOTAL
        .with_label_values(&["GET", UNMATCHED_ROUTE, "404"])
        .get();
    assert!(after - before >= 3);
}

#[actix_web::test]
async fn test_logging_passes_responses_through_full_stack() {
    let app = test::init_service(
        App::new()
            .wrap(CorrelationIdMiddleware)
            .wrap(Logging)
            .route("/echo", web::get().to(echo_handler))
            .route("/fail", web::get().to(failing_handler)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/echo")
        .insert_header((CORRELATION_ID_HEADER, "trace-7"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get(CORRELATION_ID_HEADER).unwrap(), "trace-7");
    assert_eq!(test::read_body(resp).await, "trace-7");

    let req = test::TestRequest::get().uri("/fail").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
}

use panelgrab_e2e_tests::{
    image_url, init_tracing, manifest_body, manifest_url, serve_image, serve_manifest,
};
use panelgrab_lib::PanelgrabError;
use panelgrab_lib::cli::{ListParams, ListedImage, run_list};
use panelgrab_lib::http::HttpOptions;
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_predicts_file_names_without_downloading() {
    init_tracing();

    let server = MockServer::start().await;
    let body = manifest_body(&[
        ("b", Some(image_url(&server, "/b.png?w=10").as_str())),
        ("a", Some(image_url(&server, "/a.jpg").as_str())),
        ("c", Some("")),
    ]);
    serve_manifest(&server, ResponseTemplate::new(200).set_body_string(body)).await;
    serve_image(&server, "/a.jpg", "a", 0).await;
    serve_image(&server, "/b.png", "b", 0).await;

    let listed = run_list(ListParams {
        source_url: manifest_url(&server),
        http: HttpOptions::default(),
    })
    .await
    .expect("Listing should succeed");

    assert_eq!(
        listed,
        vec![
            ListedImage {
                key: "a".to_string(),
                url: image_url(&server, "/a.jpg"),
                file_name: "1.jpg".to_string(),
            },
            ListedImage {
                key: "b".to_string(),
                url: image_url(&server, "/b.png?w=10"),
                file_name: "2.png".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_list_reports_manifest_fetch_failure() {
    init_tracing();

    let server = MockServer::start().await;
    serve_manifest(&server, ResponseTemplate::new(404)).await;

    let result = run_list(ListParams {
        source_url: manifest_url(&server),
        http: HttpOptions::default(),
    })
    .await;

    assert!(matches!(result, Err(PanelgrabError::Fetch { .. })));
}

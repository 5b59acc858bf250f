use panelgrab_lib::cli::DownloadParams;
use panelgrab_lib::http::HttpOptions;
use serde_json::{Map, Value, json};
use std::path::Path;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MANIFEST_PATH: &str = "/data/media";

/// Builds a manifest body; `None` leaves the `dhd` field out entirely.
pub fn manifest_body(entries: &[(&str, Option<&str>)]) -> String {
    let mut data = Map::new();
    for (key, dhd) in entries {
        let entry = match dhd {
            Some(url) => json!({ "dhd": url, "s": "unused" }),
            None => json!({ "dsd": "https://cdn.example.com/small.jpg" }),
        };
        data.insert(key.to_string(), entry);
    }
    json!({ "version": 1, "data": Value::Object(data) }).to_string()
}

pub async fn serve_manifest(server: &MockServer, template: ResponseTemplate) {
    tracing::debug!("Serving manifest at {}", manifest_url(server));
    Mock::given(method("GET"))
        .and(path(MANIFEST_PATH))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

pub async fn serve_image(server: &MockServer, image_path: &str, body: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub fn manifest_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), MANIFEST_PATH)
}

pub fn image_url(server: &MockServer, image_path: &str) -> String {
    format!("{}{}", server.uri(), image_path)
}

pub fn download_params(server: &MockServer, output_dir: &Path) -> DownloadParams {
    DownloadParams {
        source_url: manifest_url(server),
        output_dir: output_dir.to_path_buf(),
        http: HttpOptions {
            timeout: Some(Duration::from_secs(10)),
            user_agent: None,
        },
        report_path: None,
        allow_failures: false,
        show_progress: false,
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("panelgrab_lib=debug,panelgrab_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}

/// Sorted names of the entries in `dir`.
pub fn saved_file_names(dir: &Path) -> eyre::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let name = entry?
            .file_name()
            .into_string()
            .map_err(|name| eyre::eyre!("non UTF-8 file name: {:?}", name))?;
        names.push(name);
    }
    names.sort();
    Ok(names)
}

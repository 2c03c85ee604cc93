use tour_booking::{
    api::router::create_router,
    config::Config,
    infra::factory::bootstrap_state,
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub data_dir: PathBuf,
    pub tours_file: PathBuf,
    pub bookings_file: PathBuf,
}

#[allow(dead_code)]
impl TestApp {
    /// App backed by a fresh scratch directory. `tours` is written as the
    /// catalog file; `None` leaves the catalog file absent.
    pub fn new(tours: Option<Value>) -> Self {
        let data_dir = std::env::temp_dir().join(format!("tour_booking_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&data_dir).unwrap();

        let tours_file = data_dir.join("tours.json");
        let bookings_file = data_dir.join("bookings.json");

        if let Some(tours) = tours {
            std::fs::write(&tours_file, serde_json::to_vec_pretty(&tours).unwrap()).unwrap();
        }

        let config = Config {
            port: 0,
            tours_file: tours_file.to_string_lossy().into_owned(),
            bookings_file: bookings_file.to_string_lossy().into_owned(),
            static_dir: data_dir.join("static").to_string_lossy().into_owned(),
            log_dir: data_dir.join("logs").to_string_lossy().into_owned(),
            session_secret: "test-secret".to_string(),
        };

        let state = Arc::new(bootstrap_state(&config).unwrap());
        let router = create_router(state.clone());

        Self {
            router,
            state,
            data_dir,
            tours_file,
            bookings_file,
        }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(Some(serde_json::json!([
            {
                "id": "t1",
                "name": "Old Town Walk",
                "description": "Cobbled streets and hidden courtyards",
                "price": 25,
                "images": ["/static/img/old-town.jpg"]
            },
            { "id": "t2", "name": "Harbour Cruise" }
        ])))
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response {
        let body = serde_urlencoded::to_string(fields).unwrap();
        self.post_raw(uri, "application/x-www-form-urlencoded", body).await
    }

    pub async fn post_raw(&self, uri: &str, content_type: &str, body: impl Into<Body>) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, content_type)
                .body(body.into())
                .unwrap()
        ).await.unwrap()
    }

    pub async fn post_multipart(&self, uri: &str, fields: &[(&str, &str)]) -> Response {
        let boundary = format!("----booking{}", Uuid::new_v4().simple());
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                boundary, name, value
            ));
        }
        body.push_str(&format!("--{}--\r\n", boundary));

        self.post_raw(uri, &format!("multipart/form-data; boundary={}", boundary), body).await
    }

    pub fn stored_bookings(&self) -> Vec<Value> {
        match std::fs::read(&self.bookings_file) {
            Ok(raw) => serde_json::from_slice(&raw).unwrap(),
            Err(_) => Vec::new(),
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub mod page_test;

use std::sync::Arc;

use axum_test::TestServer;
use url::Url;

use crate::{
    application::http::server::http_server::{router, state},
    args::{Args, ImageArgs, LlmArgs, LogArgs, ServerArgs, SessionArgs},
};

pub const JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0xFF,
    0xD9,
];
pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";
pub const MODEL_REPLY: &str =
    "1. Apple - 95 cal\n2. Sandwich - 350 cal\n----\nTotal: 445 cal\nHealthy";

pub fn test_args(gemini_base_url: &str, api_key: Option<&str>) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3333".to_string()],
            metrics_enabled: false,
        },
        llm: LlmArgs {
            google_api_key: api_key.map(str::to_string),
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_base_url: Url::parse(gemini_base_url).unwrap(),
        },
        image: ImageArgs {
            max_image_bytes: 1024 * 1024,
            declared_media_type: "image/jpeg".to_string(),
        },
        session: SessionArgs {
            ttl_secs: 3600,
            secure_cookies: false,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

pub fn test_server(args: Args) -> TestServer {
    let state = state(Arc::new(args)).unwrap();
    let app = router(state).unwrap();

    TestServer::builder().save_cookies().build(app).unwrap()
}

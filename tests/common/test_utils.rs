use docqa_client::{config::ServerConfig, page::SelectedFile};
use std::collections::HashMap;

pub const SAMPLE_PDF: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\n%%EOF\n";

pub fn sample_pdf() -> SelectedFile {
    SelectedFile::new("handbook.pdf", SAMPLE_PDF)
}

/// Server config pointing at a test server's base URL.
pub fn server_config(base_url: &str) -> ServerConfig {
    ServerConfig {
        base_url: base_url.to_string(),
        upload_path: "/upload".to_string(),
        ask_path: "/ask".to_string(),
        headers: HashMap::new(),
    }
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> &'static str {
    "http://127.0.0.1:1"
}

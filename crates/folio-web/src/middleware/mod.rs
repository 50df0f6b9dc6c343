pub mod payload_limit;
pub mod security_headers;

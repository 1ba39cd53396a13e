mod http;

pub use http::Http;

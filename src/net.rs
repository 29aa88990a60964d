mod fetch;
mod request;
mod response;

pub use fetch::fetch;
pub use request::HttpRequest;
pub use response::{collect_headers, headers_from_interleaved, interleave_headers, HttpResponse};

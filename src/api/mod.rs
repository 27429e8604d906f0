pub mod client;
pub mod query;
pub mod transport;

pub use client::TngClient;
pub use query::{QueryArgs, QueryKind, build_url};
pub use transport::{HttpTransport, RawResponse, Transport};

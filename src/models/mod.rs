pub mod url;

pub use url::{ShortUrlEntry, SubmitUrlRequest};

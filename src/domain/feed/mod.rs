pub mod service;

pub use service::ContentFeed;

pub mod catalog;
pub mod feed;
pub mod pin;
pub mod tag_filter;

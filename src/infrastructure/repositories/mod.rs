pub mod hardcoded_category_repository;
pub mod image_repository;
pub mod picsum_image_repository;

pub use hardcoded_category_repository::HardcodedCategoryRepository;
pub use image_repository::ImageRepository;
pub use picsum_image_repository::PicsumImageRepository;

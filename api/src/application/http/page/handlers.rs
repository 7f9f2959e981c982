pub mod capture_image;
pub mod get_page;
pub mod run_analysis;
pub mod upload_image;

pub mod food_analysis;
pub mod health;
pub mod image_field;
pub mod page;
pub mod server;
#[cfg(test)]
pub mod test;

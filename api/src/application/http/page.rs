pub mod handlers;
pub mod router;
pub mod selection;
pub mod view;

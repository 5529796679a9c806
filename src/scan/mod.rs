pub mod handler;
pub mod handlers;
pub mod registry;

pub use handler::{search_unit, ScanHandler};
pub use registry::HandlerRegistry;

pub mod classify_handler;

pub use classify_handler::{__path_classify, classify};

//! Tools module

pub mod dtos;
pub mod jwt;
pub mod options;
pub mod refresh;
pub mod retry;
pub mod routes;

pub use dtos::*;
pub use jwt::*;
pub use options::*;
pub use refresh::*;
pub use retry::*;
pub use routes::*;

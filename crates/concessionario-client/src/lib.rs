#![doc = include_str!("../README.md")]

pub mod api;
mod config;
mod error;
pub mod guard;
mod http;
pub mod page;
pub mod resource;
mod session;
pub mod storage;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, LoginError};
pub use guard::{AuthState, GuardDecision};
pub use http::HttpClient;
pub use page::Page;
pub use resource::{Creatable, Editable, Resource, Searchable};
pub use session::SessionStore;
pub use storage::{MemoryStorage, SessionStorage};

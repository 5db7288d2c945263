//! Catalog Admin Common Library
//!
//! CLIとWeb(WASM)で共有される型と管理コンソールのワークフロー

pub mod api;
pub mod console;
pub mod detail;
pub mod error;
pub mod form;
pub mod session;
pub mod store;
pub mod types;

pub use api::{ApiConfig, ApiMessage, ApiRequest, ApiResponse, CatalogApi, CatalogClient, Endpoint, HttpTransport, Method};
pub use console::{AdminConsole, Alert, AlertKind, ConsoleState, Feedback};
pub use detail::DetailViewer;
pub use error::{Error, Result};
pub use form::{FieldInput, FormMode, ImageSlots, ProductDraft, ProductField, IMAGE_SLOT_CAPACITY};
pub use session::{MemorySessionStore, SessionPhase, SessionStore, SessionToken};
pub use store::ProductList;
pub use types::{format_price, Credentials, Product};

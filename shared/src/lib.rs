pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod panel;
pub mod templates;

pub use backend::{BackendClient, StrategyBackend};
pub use config::Config;
pub use error::{BackendError, BackendResult};
pub use models::*;
pub use panel::{FormError, FormState, ListState, StrategyForm, StrategyPanel, SubmitOutcome};
pub use templates::LandingPage;

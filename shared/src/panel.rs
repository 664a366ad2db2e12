//! Strategy demo panel: the create form plus the list of saved strategies.
//!
//! The list is shared by every render and is written only when a list call
//! completes. Form state belongs to a single interaction and moves through
//! `idle -> submitting -> idle` via [`FormState::begin_submit`] and
//! [`FormState::finish_submit`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::backend::StrategyBackend;
use crate::error::BackendResult;
use crate::models::{NewStrategy, Strategy};

pub const CREATE_FAILED_NOTICE: &str = "Unable to create strategy right now.";

pub const DEFAULT_SYMBOL: &str = "BTCUSDT";
pub const DEFAULT_TIMEFRAME: &str = "1h";
pub const DEFAULT_RISK_PER_TRADE: f64 = 0.01;
pub const RISK_STEP: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Risk per trade must be a number")]
    RiskNotNumber,

    #[error("Risk per trade must be between 0 and 1")]
    RiskOutOfRange,

    #[error("Risk per trade must be a multiple of 0.001")]
    RiskStep,

    #[error("A strategy is already being created")]
    InFlight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyForm {
    pub name: String,
    pub description: String,
    pub symbol: String,
    pub timeframe: String,
    /// Kept as typed so a rejected value re-renders unchanged.
    pub risk_per_trade: String,
}

impl Default for StrategyForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            symbol: DEFAULT_SYMBOL.to_string(),
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            risk_per_trade: DEFAULT_RISK_PER_TRADE.to_string(),
        }
    }
}

impl StrategyForm {
    /// Check the constraints the form's inputs declare and build the create
    /// payload. Anything deeper is left to the backend.
    pub fn validate(&self) -> Result<NewStrategy, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("Strategy name"));
        }
        if self.symbol.trim().is_empty() {
            return Err(FormError::MissingField("Symbol"));
        }
        if self.timeframe.trim().is_empty() {
            return Err(FormError::MissingField("Timeframe"));
        }

        let risk: f64 = self
            .risk_per_trade
            .trim()
            .parse()
            .map_err(|_| FormError::RiskNotNumber)?;
        if !risk.is_finite() {
            return Err(FormError::RiskNotNumber);
        }
        if !(0.0..=1.0).contains(&risk) {
            return Err(FormError::RiskOutOfRange);
        }
        let steps = risk / RISK_STEP;
        if (steps - steps.round()).abs() > 1e-6 {
            return Err(FormError::RiskStep);
        }

        Ok(NewStrategy {
            name: self.name.clone(),
            description: self.description.clone(),
            symbol: self.symbol.clone(),
            timeframe: self.timeframe.clone(),
            risk_per_trade: risk,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub fields: StrategyForm,
    pub submitting: bool,
    pub notice: Option<String>,
}

impl FormState {
    pub fn with_fields(fields: StrategyForm) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn notice_text(&self) -> &str {
        self.notice.as_deref().unwrap_or_default()
    }

    pub fn submit_disabled(&self) -> bool {
        self.submitting
    }

    /// idle -> submitting. Returns the payload to send.
    pub fn begin_submit(&mut self) -> Result<NewStrategy, FormError> {
        if self.submitting {
            return Err(FormError::InFlight);
        }
        match self.fields.validate() {
            Ok(payload) => {
                self.submitting = true;
                self.notice = None;
                Ok(payload)
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// submitting -> idle. Success resets the fields; failure keeps them and
    /// sets the generic notice.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.fields = StrategyForm::default();
            self.notice = None;
        } else {
            self.notice = Some(CREATE_FAILED_NOTICE.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Rejected(FormError),
    Failed,
}

/// Result of the last list calls. `items` always holds the last successful
/// fetch.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub items: Vec<Strategy>,
    pub last_error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl ListState {
    fn apply(&mut self, result: BackendResult<Vec<Strategy>>) -> bool {
        match result {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
                self.fetched_at = Some(Utc::now());
                true
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                false
            }
        }
    }
}

pub struct StrategyPanel {
    backend: Arc<dyn StrategyBackend>,
    list: RwLock<ListState>,
}

impl StrategyPanel {
    pub fn new(backend: Arc<dyn StrategyBackend>) -> Self {
        Self {
            backend,
            list: RwLock::new(ListState::default()),
        }
    }

    /// First render: one list call, then the list to display.
    pub async fn mount(&self) -> Vec<Strategy> {
        self.refresh().await;
        self.strategies().await
    }

    /// List strategies. On failure the previous items stay in place.
    pub async fn refresh(&self) -> bool {
        let result = self.backend.list_strategies().await;
        if let Err(e) = &result {
            error!("Failed to fetch strategies: {}", e);
        }

        let mut list = self.list.write().await;
        let updated = list.apply(result);
        if updated {
            info!("Fetched {} strategies", list.items.len());
        }
        updated
    }

    pub async fn strategies(&self) -> Vec<Strategy> {
        self.list.read().await.items.clone()
    }

    pub async fn list_state(&self) -> ListState {
        self.list.read().await.clone()
    }

    /// Create a strategy from the form. Refreshes the list only after the
    /// backend accepted it.
    pub async fn submit(&self, form: &mut FormState) -> SubmitOutcome {
        let payload = match form.begin_submit() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Rejected strategy form: {}", e);
                return SubmitOutcome::Rejected(e);
            }
        };

        match self.backend.create_strategy(&payload).await {
            Ok(()) => {
                info!("Created strategy {:?}", payload.name);
                form.finish_submit(true);
                self.refresh().await;
                SubmitOutcome::Created
            }
            Err(e) => {
                error!("Failed to create strategy {:?}: {}", payload.name, e);
                form.finish_submit(false);
                SubmitOutcome::Failed
            }
        }
    }
}

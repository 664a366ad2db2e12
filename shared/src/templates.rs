use askama::Template;

use crate::models::Strategy;
use crate::panel::FormState;

pub struct FeatureCard {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        title: "Strategy Builder",
        desc: "Define symbols, timeframes, and risk per trade with a clean, simple flow.",
    },
    FeatureCard {
        title: "Signal Inbox",
        desc: "Generate buy/sell signals and track confidence levels.",
    },
    FeatureCard {
        title: "Paper Trading",
        desc: "Simulate positions and PnL with zero risk using our backend.",
    },
];

/// The whole landing page: header, hero, features, demo panel, CTA, footer.
#[derive(Template)]
#[template(path = "index.html")]
pub struct LandingPage<'a> {
    pub features: &'a [FeatureCard],
    pub strategies: &'a [Strategy],
    pub form: &'a FormState,
}

impl<'a> LandingPage<'a> {
    pub fn new(strategies: &'a [Strategy], form: &'a FormState) -> Self {
        Self {
            features: FEATURES,
            strategies,
            form,
        }
    }
}

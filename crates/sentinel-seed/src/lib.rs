//! # sentinel-seed
//!
//! Populates an empty store with a demonstration dataset: activities drawn
//! from a normal and an anomalous behavior profile, an alert for every
//! activity at medium risk or above, and two static model-metrics rows.
//! A store that already holds activities is left untouched.

pub mod activity;
pub mod alerts;
pub mod identity;
pub mod model_metrics;
pub mod pipeline;
pub mod profile;
pub mod random;
pub mod risk;

pub use activity::ActivityGenerator;
pub use alerts::{generate_alert, AlertCatalog};
pub use model_metrics::baseline_model_metrics;
pub use pipeline::{SeedOutcome, SeedReport, SeedStage, StageOutcome, StageReport, Synthesizer};
pub use profile::{BehaviorProfile, CountRange};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use risk::{risk_score, RiskWeights};

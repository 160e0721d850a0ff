//! # Study Plan Core
//!
//! Domain types and the scheduling engine for study plans. Everything in this
//! crate is synchronous and free of I/O: callers load a [`StudyPlan`], hand it
//! untrusted [`TimeBlockProposal`]s, and get back a [`ValidationReport`] that
//! they are free to persist.
//!
//! The engine is split into four pieces:
//!
//! - [`scheduling::overlap`]: half-open interval intersection
//! - [`scheduling::validator`]: per-proposal checks against a plan
//! - [`scheduling::reconcile`]: best-effort batch acceptance
//! - [`scheduling::calendar`]: grid and time-of-day projections
//!
//! [`StudyPlan`]: models::study_plan::StudyPlan
//! [`TimeBlockProposal`]: models::time_block::TimeBlockProposal
//! [`ValidationReport`]: models::report::ValidationReport

pub mod errors;
pub mod models;
pub mod scheduling;

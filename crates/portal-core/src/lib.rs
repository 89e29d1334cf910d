//! Portal Core: session context, snapshots, and the submission machine
//!
//! The pieces every form shares: an explicit [`SessionContext`] instead of
//! ambient globals, the immutable [`FormSnapshot`] captured at submit time,
//! the [`PortalBackend`] contract for the (simulated) remote call, and the
//! [`SubmissionController`] state machine that ties them together.
//!
//! ```text
//! FormState ──is_form_valid──▶ SubmissionController ──submit──▶ PortalBackend
//!     ▲                              │                               │
//!     └── UiDirectives ◀─────────────┴──── SubmissionOutcome ◀───────┘
//! ```

pub mod backend;
pub mod context;
pub mod controller;
pub mod snapshot;

pub use backend::{BoxFuture, PortalBackend, SimulatedBackend};
pub use context::{Role, SessionContext, Theme};
pub use controller::{SubmissionController, SubmissionPhase, SubmissionReport, UiDirective};
pub use snapshot::{FormSnapshot, SubmissionOutcome};

/// Portal logic version
pub const PORTAL_VERSION: &str = "1.0.0";

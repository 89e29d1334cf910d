//! Portal Dashboard: records, transitions, and progress
//!
//! In-memory assignment and certificate collections with role-gated,
//! one-way status transitions, plus the subject-progress scoring behind the
//! landing page's widgets.
//!
//! ```text
//! Assignment:   Pending ──submit (student)──▶ Submitted ──grade (staff)──▶ Graded
//! Certificate:  Pending ──verify (staff)──▶ Verified
//!                       ──reject (staff)──▶ Rejected
//! ```

pub mod dates;
pub mod progress;
pub mod records;
pub mod seed;
pub mod store;

pub use dates::{format_long_date, time_ago};
pub use progress::{GradeBand, SubjectProgress};
pub use records::{
    Assignment, AssignmentStatus, Certificate, CertificateStatus, NewAssignment, NewCertificate,
};
pub use store::{can_grade, can_review, can_submit, DashboardError, DashboardStore};

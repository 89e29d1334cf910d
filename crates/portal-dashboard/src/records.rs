//! Dashboard record types
//!
//! Assignments advance Pending → Submitted → Graded and never reverse.
//! Certificates go Pending → Verified or Pending → Rejected, terminal either
//! way. Both graphs are one-way; every edge is reachable by exactly one role
//! action.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
}

impl AssignmentStatus {
    /// Badge style the renderer applies
    pub fn badge_class(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "bg-warning",
            AssignmentStatus::Submitted => "bg-info",
            AssignmentStatus::Graded => "bg-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Sequential, 1-based, assigned as len + 1. Not durable under deletion;
    /// the store exposes no removal API for exactly that reason.
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub due_date: NaiveDateTime,
    pub status: AssignmentStatus,
    pub grade: Option<i32>,
    pub feedback: Option<String>,
}

/// Fields the instructor fills in when creating an assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignment {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub due_date: Option<NaiveDateTime>,
}

impl NewAssignment {
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.description.trim().is_empty()
            && self.due_date.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    Pending,
    Verified,
    Rejected,
}

impl CertificateStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            CertificateStatus::Pending => "bg-warning",
            CertificateStatus::Verified => "bg-success",
            CertificateStatus::Rejected => "bg-danger",
        }
    }

    /// Verified and Rejected are both terminal
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CertificateStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub date_issued: NaiveDate,
    pub status: CertificateStatus,
    pub file_name: String,
}

/// Fields of the certificate upload form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCertificate {
    pub title: String,
    pub issuer: String,
    pub date_issued: Option<NaiveDate>,
    pub file_name: String,
}

impl NewCertificate {
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.issuer.trim().is_empty()
            && self.date_issued.is_some()
            && !self.file_name.trim().is_empty()
    }
}

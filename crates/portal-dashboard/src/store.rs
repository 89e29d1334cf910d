//! Dashboard store
//!
//! In-memory lists of assignments and certificates, owned for the lifetime
//! of the page session. Every status transition is role-gated and one-way.

use thiserror::Error;

use portal_core::{Role, SessionContext};

use crate::records::{
    Assignment, AssignmentStatus, Certificate, CertificateStatus, NewAssignment, NewCertificate,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("DASH/NOT_FOUND: no record with id {0}")]
    NotFound(u32),

    #[error("DASH/ROLE: {role} may not {action}")]
    RoleDenied { role: Role, action: &'static str },

    #[error("DASH/TRANSITION: cannot {action} a record that is {state}")]
    InvalidTransition { action: &'static str, state: String },

    #[error("DASH/INPUT: please fill in all fields")]
    MissingFields,
}

/// The landing page's record collections
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    assignments: Vec<Assignment>,
    certificates: Vec<Certificate>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the sample data the page seeds on load
    pub fn with_sample_data() -> Self {
        Self {
            assignments: crate::seed::sample_assignments(),
            certificates: crate::seed::sample_certificates(),
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn assignment(&self, id: u32) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn certificate(&self, id: u32) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.id == id)
    }

    /// Teacher/admin only. A new assignment starts Pending.
    pub fn create_assignment(
        &mut self,
        ctx: &SessionContext,
        fields: NewAssignment,
    ) -> Result<Assignment, DashboardError> {
        if !ctx.role.is_staff() {
            return Err(DashboardError::RoleDenied {
                role: ctx.role,
                action: "create assignments",
            });
        }
        if !fields.is_complete() {
            return Err(DashboardError::MissingFields);
        }
        let due_date = fields.due_date.ok_or(DashboardError::MissingFields)?;
        let assignment = Assignment {
            id: self.assignments.len() as u32 + 1,
            title: fields.title,
            subject: fields.subject,
            description: fields.description,
            due_date,
            status: AssignmentStatus::Pending,
            grade: None,
            feedback: None,
        };
        tracing::info!(id = assignment.id, title = %assignment.title, "assignment created");
        self.assignments.push(assignment.clone());
        Ok(assignment)
    }

    /// Student only, and only on a record currently Pending
    pub fn submit_assignment(
        &mut self,
        ctx: &SessionContext,
        id: u32,
    ) -> Result<&Assignment, DashboardError> {
        if ctx.role != Role::Student {
            return Err(DashboardError::RoleDenied {
                role: ctx.role,
                action: "submit assignments",
            });
        }
        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DashboardError::NotFound(id))?;
        if assignment.status != AssignmentStatus::Pending {
            return Err(DashboardError::InvalidTransition {
                action: "submit",
                state: format!("{:?}", assignment.status),
            });
        }
        assignment.status = AssignmentStatus::Submitted;
        tracing::info!(id, "assignment submitted");
        Ok(assignment)
    }

    /// Teacher/admin only, and only on a record currently Submitted. The
    /// grade is accepted as entered, including out-of-range values; we flag
    /// it in the log rather than clamp.
    pub fn grade_assignment(
        &mut self,
        ctx: &SessionContext,
        id: u32,
        grade: i32,
        feedback: impl Into<String>,
    ) -> Result<&Assignment, DashboardError> {
        if !ctx.role.is_staff() {
            return Err(DashboardError::RoleDenied {
                role: ctx.role,
                action: "grade assignments",
            });
        }
        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DashboardError::NotFound(id))?;
        if assignment.status != AssignmentStatus::Submitted {
            return Err(DashboardError::InvalidTransition {
                action: "grade",
                state: format!("{:?}", assignment.status),
            });
        }
        if !(0..=100).contains(&grade) {
            tracing::warn!(id, grade, "grade outside 0-100 accepted as entered");
        }
        assignment.status = AssignmentStatus::Graded;
        assignment.grade = Some(grade);
        assignment.feedback = Some(feedback.into());
        tracing::info!(id, grade, "assignment graded");
        Ok(assignment)
    }

    /// Any role may upload; a new certificate starts Pending
    pub fn upload_certificate(
        &mut self,
        _ctx: &SessionContext,
        fields: NewCertificate,
    ) -> Result<Certificate, DashboardError> {
        if !fields.is_complete() {
            return Err(DashboardError::MissingFields);
        }
        let date_issued = fields.date_issued.ok_or(DashboardError::MissingFields)?;
        let certificate = Certificate {
            id: self.certificates.len() as u32 + 1,
            title: fields.title,
            issuer: fields.issuer,
            date_issued,
            status: CertificateStatus::Pending,
            file_name: fields.file_name,
        };
        tracing::info!(id = certificate.id, title = %certificate.title, "certificate uploaded");
        self.certificates.push(certificate.clone());
        Ok(certificate)
    }

    /// Teacher/admin only, and only on a record currently Pending
    pub fn verify_certificate(
        &mut self,
        ctx: &SessionContext,
        id: u32,
    ) -> Result<&Certificate, DashboardError> {
        self.review_certificate(ctx, id, CertificateStatus::Verified, "verify")
    }

    /// Teacher/admin only, and only on a record currently Pending
    pub fn reject_certificate(
        &mut self,
        ctx: &SessionContext,
        id: u32,
    ) -> Result<&Certificate, DashboardError> {
        self.review_certificate(ctx, id, CertificateStatus::Rejected, "reject")
    }

    fn review_certificate(
        &mut self,
        ctx: &SessionContext,
        id: u32,
        target: CertificateStatus,
        action: &'static str,
    ) -> Result<&Certificate, DashboardError> {
        if !ctx.role.is_staff() {
            return Err(DashboardError::RoleDenied {
                role: ctx.role,
                action: "review certificates",
            });
        }
        let certificate = self
            .certificates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DashboardError::NotFound(id))?;
        if certificate.status.is_terminal() {
            return Err(DashboardError::InvalidTransition {
                action,
                state: format!("{:?}", certificate.status),
            });
        }
        certificate.status = target;
        tracing::info!(id, ?target, "certificate reviewed");
        Ok(certificate)
    }
}

/// Whether the student sees a Submit button on this card
pub fn can_submit(role: Role, assignment: &Assignment) -> bool {
    role == Role::Student && assignment.status == AssignmentStatus::Pending
}

/// Whether staff see a Grade button on this card
pub fn can_grade(role: Role, assignment: &Assignment) -> bool {
    role.is_staff() && assignment.status == AssignmentStatus::Submitted
}

/// Whether staff see Verify/Reject buttons on this card
pub fn can_review(role: Role, certificate: &Certificate) -> bool {
    role.is_staff() && certificate.status == CertificateStatus::Pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx(role: Role) -> SessionContext {
        SessionContext::new(role)
    }

    fn new_assignment(title: &str) -> NewAssignment {
        NewAssignment {
            title: title.to_string(),
            subject: "Mathematics".to_string(),
            description: "Problems 1-20".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(23, 59, 0),
        }
    }

    fn new_certificate(title: &str) -> NewCertificate {
        NewCertificate {
            title: title.to_string(),
            issuer: "TechCorp Academy".to_string(),
            date_issued: NaiveDate::from_ymd_opt(2024, 1, 10),
            file_name: "cert.pdf".to_string(),
        }
    }

    #[test]
    fn create_is_staff_only() {
        let mut store = DashboardStore::new();
        let err = store
            .create_assignment(&ctx(Role::Student), new_assignment("X"))
            .unwrap_err();
        assert!(matches!(err, DashboardError::RoleDenied { .. }));
        assert!(store
            .create_assignment(&ctx(Role::Teacher), new_assignment("X"))
            .is_ok());
    }

    #[test]
    fn create_rejects_incomplete_fields() {
        let mut store = DashboardStore::new();
        let mut fields = new_assignment("X");
        fields.description.clear();
        assert_eq!(
            store.create_assignment(&ctx(Role::Admin), fields).unwrap_err(),
            DashboardError::MissingFields
        );
    }

    #[test]
    fn ids_are_sequential_from_length() {
        let mut store = DashboardStore::new();
        let teacher = ctx(Role::Teacher);
        assert_eq!(store.create_assignment(&teacher, new_assignment("A")).unwrap().id, 1);
        assert_eq!(store.create_assignment(&teacher, new_assignment("B")).unwrap().id, 2);
    }

    #[test]
    fn assignment_lifecycle_advances_one_way() {
        let mut store = DashboardStore::new();
        let teacher = ctx(Role::Teacher);
        let student = ctx(Role::Student);
        let id = store.create_assignment(&teacher, new_assignment("A")).unwrap().id;

        // Teacher cannot submit on the student's behalf
        assert!(matches!(
            store.submit_assignment(&teacher, id).unwrap_err(),
            DashboardError::RoleDenied { .. }
        ));

        // Grade before submission is an invalid transition
        assert!(matches!(
            store.grade_assignment(&teacher, id, 90, "early").unwrap_err(),
            DashboardError::InvalidTransition { .. }
        ));

        assert_eq!(
            store.submit_assignment(&student, id).unwrap().status,
            AssignmentStatus::Submitted
        );

        let graded = store
            .grade_assignment(&teacher, id, 92, "Excellent analysis!")
            .unwrap();
        assert_eq!(graded.status, AssignmentStatus::Graded);
        assert_eq!(graded.grade, Some(92));
        assert_eq!(graded.feedback.as_deref(), Some("Excellent analysis!"));
    }

    #[test]
    fn submit_on_graded_record_leaves_status_unchanged() {
        let mut store = DashboardStore::new();
        let teacher = ctx(Role::Teacher);
        let student = ctx(Role::Student);
        let id = store.create_assignment(&teacher, new_assignment("A")).unwrap().id;
        store.submit_assignment(&student, id).unwrap();
        store.grade_assignment(&teacher, id, 80, "ok").unwrap();

        assert!(store.submit_assignment(&student, id).is_err());
        assert_eq!(store.assignment(id).unwrap().status, AssignmentStatus::Graded);
    }

    #[test]
    fn out_of_range_grade_is_accepted_as_entered() {
        let mut store = DashboardStore::new();
        let teacher = ctx(Role::Teacher);
        let student = ctx(Role::Student);
        let id = store.create_assignment(&teacher, new_assignment("A")).unwrap().id;
        store.submit_assignment(&student, id).unwrap();

        let graded = store.grade_assignment(&teacher, id, 150, "generous").unwrap();
        assert_eq!(graded.grade, Some(150));
    }

    #[test]
    fn certificate_review_is_terminal() {
        let mut store = DashboardStore::new();
        let student = ctx(Role::Student);
        let admin = ctx(Role::Admin);
        let id = store.upload_certificate(&student, new_certificate("Python")).unwrap().id;

        assert!(matches!(
            store.verify_certificate(&student, id).unwrap_err(),
            DashboardError::RoleDenied { .. }
        ));

        assert_eq!(
            store.verify_certificate(&admin, id).unwrap().status,
            CertificateStatus::Verified
        );
        // Terminal either way: no further review
        assert!(store.reject_certificate(&admin, id).is_err());
        assert_eq!(
            store.certificate(id).unwrap().status,
            CertificateStatus::Verified
        );
    }

    #[test]
    fn action_predicates_follow_role_and_status() {
        let mut store = DashboardStore::with_sample_data();
        let pending = store.assignment(1).unwrap().clone();
        let submitted = store.assignment(2).unwrap().clone();

        assert!(can_submit(Role::Student, &pending));
        assert!(!can_submit(Role::Teacher, &pending));
        assert!(!can_submit(Role::Student, &submitted));

        assert!(can_grade(Role::Teacher, &submitted));
        assert!(can_grade(Role::Admin, &submitted));
        assert!(!can_grade(Role::Student, &submitted));
        assert!(!can_grade(Role::Teacher, &pending));

        let pending_cert = store.certificate(2).unwrap().clone();
        assert!(can_review(Role::Admin, &pending_cert));
        assert!(!can_review(Role::Student, &pending_cert));

        let verified = store.verify_certificate(&ctx(Role::Admin), 2).unwrap().clone();
        assert!(!can_review(Role::Admin, &verified));
    }
}

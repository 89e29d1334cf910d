//! Dashboard actions
//!
//! Wraps the record store so every operation announces its outcome the way
//! the landing page does: a five-second success toast, a warning for
//! rejections, and a sticky error when the operation itself is refused.

use portal_core::SessionContext;
use portal_dashboard::{
    Assignment, Certificate, DashboardError, DashboardStore, NewAssignment, NewCertificate,
};
use portal_notify::{Notification, NotificationCenter};

fn announce<T>(
    center: &mut NotificationCenter,
    result: Result<T, DashboardError>,
    success: Notification,
) -> Result<T, DashboardError> {
    match result {
        Ok(value) => {
            center.push(success);
            Ok(value)
        }
        Err(err) => {
            center.push(Notification::danger(err.to_string()).sticky());
            Err(err)
        }
    }
}

pub fn create_assignment(
    store: &mut DashboardStore,
    ctx: &SessionContext,
    center: &mut NotificationCenter,
    fields: NewAssignment,
) -> Result<Assignment, DashboardError> {
    announce(
        center,
        store.create_assignment(ctx, fields),
        Notification::success("Assignment created successfully!").dismiss_after_secs(5),
    )
}

pub fn submit_assignment(
    store: &mut DashboardStore,
    ctx: &SessionContext,
    center: &mut NotificationCenter,
    id: u32,
) -> Result<(), DashboardError> {
    announce(
        center,
        store.submit_assignment(ctx, id).map(|_| ()),
        Notification::success("Assignment submitted successfully!").dismiss_after_secs(5),
    )
}

pub fn grade_assignment(
    store: &mut DashboardStore,
    ctx: &SessionContext,
    center: &mut NotificationCenter,
    id: u32,
    grade: i32,
    feedback: &str,
) -> Result<(), DashboardError> {
    announce(
        center,
        store.grade_assignment(ctx, id, grade, feedback).map(|_| ()),
        Notification::success("Assignment graded successfully!").dismiss_after_secs(5),
    )
}

pub fn upload_certificate(
    store: &mut DashboardStore,
    ctx: &SessionContext,
    center: &mut NotificationCenter,
    fields: NewCertificate,
) -> Result<Certificate, DashboardError> {
    announce(
        center,
        store.upload_certificate(ctx, fields),
        Notification::success("Certificate uploaded successfully!").dismiss_after_secs(5),
    )
}

pub fn verify_certificate(
    store: &mut DashboardStore,
    ctx: &SessionContext,
    center: &mut NotificationCenter,
    id: u32,
) -> Result<(), DashboardError> {
    announce(
        center,
        store.verify_certificate(ctx, id).map(|_| ()),
        Notification::success("Certificate verified successfully!").dismiss_after_secs(5),
    )
}

pub fn reject_certificate(
    store: &mut DashboardStore,
    ctx: &SessionContext,
    center: &mut NotificationCenter,
    id: u32,
) -> Result<(), DashboardError> {
    announce(
        center,
        store.reject_certificate(ctx, id).map(|_| ()),
        Notification::warning("Certificate rejected.").dismiss_after_secs(5),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::Role;
    use portal_notify::Severity;

    #[test]
    fn submit_announces_success() {
        let mut store = DashboardStore::with_sample_data();
        let mut center = NotificationCenter::new();
        let student = SessionContext::new(Role::Student);

        submit_assignment(&mut store, &student, &mut center, 1).unwrap();
        let note = center.latest().unwrap();
        assert_eq!(note.severity, Severity::Success);
        assert_eq!(note.message, "Assignment submitted successfully!");
    }

    #[test]
    fn refused_operation_announces_sticky_error() {
        let mut store = DashboardStore::with_sample_data();
        let mut center = NotificationCenter::new();
        let student = SessionContext::new(Role::Student);

        assert!(verify_certificate(&mut store, &student, &mut center, 2).is_err());
        let note = center.latest().unwrap();
        assert_eq!(note.severity, Severity::Danger);
        assert_eq!(note.auto_dismiss, None);
    }

    #[test]
    fn rejection_is_a_warning() {
        let mut store = DashboardStore::with_sample_data();
        let mut center = NotificationCenter::new();
        let admin = SessionContext::new(Role::Admin);

        reject_certificate(&mut store, &admin, &mut center, 2).unwrap();
        assert_eq!(center.latest().unwrap().severity, Severity::Warning);
    }
}

//! Sample data the landing page seeds on load

use chrono::{NaiveDate, NaiveDateTime};

use crate::progress::SubjectProgress;
use crate::records::{
    Assignment, AssignmentStatus, Certificate, CertificateStatus,
};

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn sample_assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: 1,
            title: "Calculus Problem Set #3".to_string(),
            subject: "Mathematics".to_string(),
            description: "Complete problems 1-20 from Chapter 5".to_string(),
            due_date: datetime(2024, 1, 20, 23, 59),
            status: AssignmentStatus::Pending,
            grade: None,
            feedback: None,
        },
        Assignment {
            id: 2,
            title: "Physics Lab Report".to_string(),
            subject: "Physics".to_string(),
            description: "Write a comprehensive report on the pendulum experiment".to_string(),
            due_date: datetime(2024, 1, 25, 23, 59),
            status: AssignmentStatus::Submitted,
            grade: None,
            feedback: None,
        },
        Assignment {
            id: 3,
            title: "English Essay".to_string(),
            subject: "English Literature".to_string(),
            description: "Write an analysis of Shakespeare's Hamlet".to_string(),
            due_date: datetime(2024, 1, 15, 23, 59),
            status: AssignmentStatus::Graded,
            grade: Some(92),
            feedback: Some("Excellent analysis of character development!".to_string()),
        },
    ]
}

pub fn sample_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: 1,
            title: "Python Programming Certificate".to_string(),
            issuer: "TechCorp Academy".to_string(),
            date_issued: date(2023, 12, 15),
            status: CertificateStatus::Verified,
            file_name: "python-cert.pdf".to_string(),
        },
        Certificate {
            id: 2,
            title: "Data Science Fundamentals".to_string(),
            issuer: "DataLearn Institute".to_string(),
            date_issued: date(2024, 1, 10),
            status: CertificateStatus::Pending,
            file_name: "data-science-cert.pdf".to_string(),
        },
    ]
}

pub fn subject_progress() -> Vec<SubjectProgress> {
    vec![
        SubjectProgress::new("Mathematics", 88, 95, 90),
        SubjectProgress::new("Physics", 92, 88, 85),
        SubjectProgress::new("Chemistry", 85, 92, 95),
        SubjectProgress::new("English Literature", 90, 98, 88),
        SubjectProgress::new("History", 87, 90, 92),
    ]
}

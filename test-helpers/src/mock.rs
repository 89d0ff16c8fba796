//! Sample data for the dev-server and for tests that want a populated
//! backend.
//!
//! Every collection gets entries in each status its screen can show, plus
//! a few deliberately sparse records so the "Not provided" placeholders and
//! missing-field handling are visible during UI work.

use mock_api::store::Store;
use serde_json::{Value, json};
use tracing::info;

/// Counts of what was seeded, per collection.
pub struct DevDataset {
    pub counts: Vec<(&'static str, usize)>,
}

impl DevDataset {
    pub fn seed(store: &Store) -> Self {
        let collections: [(&'static str, Vec<Value>); 7] = [
            ("alumni", alumni()),
            ("students", students()),
            ("jobs", jobs()),
            ("events", events()),
            ("blogs", blogs()),
            ("mentorships", mentorships()),
            ("pending-requests", registrations()),
        ];
        let counts = collections
            .into_iter()
            .map(|(collection, documents)| {
                let count = documents.len();
                store.seed(collection, documents);
                (collection, count)
            })
            .collect();
        Self { counts }
    }

    pub fn print_summary(&self) {
        info!("📋 Seeded collections:");
        for (collection, count) in &self.counts {
            info!("   {collection}: {count}");
        }
    }
}

fn alumni() -> Vec<Value> {
    vec![
        json!({
            "_id": "alu-001",
            "name": "Asha Verma",
            "email": "asha.verma@mitsgwl.ac.in",
            "branch": "CSE",
            "batch": 2019,
            "location": "Gwalior",
            "company": "Infosys",
            "designation": "Senior Engineer",
            "status": "pending",
            "profile": {
                "bio": "Backend engineer working on payment systems.",
                "education": [{
                    "institution": "MITS Gwalior",
                    "degree": "B.Tech",
                    "fieldOfStudy": "Computer Science",
                    "startYear": 2015,
                    "endYear": 2019
                }],
                "experience": [
                    {
                        "company": "Infosys",
                        "role": "Senior Engineer",
                        "startYear": 2022
                    },
                    {
                        "company": "TCS",
                        "role": "Engineer",
                        "startYear": 2019,
                        "endYear": 2022
                    }
                ],
                "skills": ["Rust", "PostgreSQL", "Kubernetes"],
                "links": {
                    "linkedin": "https://www.linkedin.com/in/asha-verma",
                    "github": "https://github.com/ashaverma"
                }
            }
        }),
        json!({
            "_id": "alu-002",
            "name": "Bhavesh Rao",
            "email": "bhavesh.rao@example.com",
            "branch": "ECE",
            "batch": 2020,
            "location": "Pune",
            "status": "approved"
        }),
        json!({
            "_id": "alu-003",
            "name": "Chitra Nair",
            "email": "chitra.nair@example.com",
            "branch": "cse",
            "batch": 2018,
            "location": "Bengaluru",
            "company": "Google",
            "designation": "Product Manager",
            "status": "pending"
        }),
        json!({
            "_id": "alu-004",
            "name": "Devansh Gupta",
            "email": "devansh@example.com",
            "branch": "ME",
            "batch": 2017,
            "status": "rejected"
        }),
        // sparse on purpose
        json!({ "_id": "alu-005", "name": "Esha Jain", "status": "pending" }),
    ]
}

fn students() -> Vec<Value> {
    vec![
        json!({
            "_id": "stu-001",
            "name": "Farhan Ali",
            "email": "farhan.ali@mitsgwl.ac.in",
            "branch": "CSE",
            "batch": 2026,
            "enrollmentNumber": "0901CS221045",
            "phone": "+91 98765 43210",
            "status": "active"
        }),
        json!({
            "_id": "stu-002",
            "name": "Gauri Sharma",
            "email": "gauri.sharma@mitsgwl.ac.in",
            "branch": "IT",
            "batch": 2025,
            "status": "inactive"
        }),
        json!({
            "_id": "stu-003",
            "name": "Harsh Patel",
            "email": "harsh.patel@mitsgwl.ac.in",
            "branch": "EE",
            "batch": 2027,
            "status": "active"
        }),
    ]
}

fn jobs() -> Vec<Value> {
    vec![
        json!({
            "_id": "job-001",
            "title": "Backend Engineer",
            "company": "Infosys",
            "location": "Pune",
            "jobType": "Full-time",
            "description": "Build and run internal payment services.",
            "postedBy": "Asha Verma",
            "applyLink": "https://careers.example.com/backend",
            "createdAt": "2025-05-02T09:30:00Z",
            "status": "pending"
        }),
        json!({
            "_id": "job-002",
            "title": "Data Analyst Intern",
            "company": "Zomato",
            "location": "Gurugram",
            "jobType": "Internship",
            "status": "active"
        }),
        json!({
            "_id": "job-003",
            "title": "Embedded Systems Engineer",
            "company": "Bosch",
            "location": "Bengaluru",
            "jobType": "Full-time",
            "status": "inactive"
        }),
    ]
}

fn events() -> Vec<Value> {
    vec![
        json!({
            "_id": "evt-001",
            "title": "Alumni Meet 2025",
            "category": "Reunion",
            "location": "MITS Gwalior Auditorium",
            "organizer": "Alumni Cell",
            "description": "Annual reunion with talks from the class of 2000.",
            "startsAt": "2025-12-20T10:00:00Z",
            "status": "pending"
        }),
        json!({
            "_id": "evt-002",
            "title": "Career Talk: Cloud Careers",
            "category": "Webinar",
            "location": "Online",
            "startsAt": "2025-08-14T13:30:00Z",
            "status": "approved"
        }),
        json!({
            "_id": "evt-003",
            "title": "Hackathon Mentoring Day",
            "category": "Workshop",
            "status": "rejected"
        }),
    ]
}

fn blogs() -> Vec<Value> {
    vec![
        json!({
            "_id": "blog-001",
            "title": "From MITS to Silicon Valley",
            "author": "Chitra Nair",
            "category": "Career",
            "summary": "Lessons from ten years in product management.",
            "content": "When I left Gwalior in 2018 ...",
            "createdAt": "2025-04-11T08:00:00Z",
            "status": "pending"
        }),
        json!({
            "_id": "blog-002",
            "title": "Preparing for GATE while working",
            "author": "Devansh Gupta",
            "category": "Higher Studies",
            "status": "approved"
        }),
    ]
}

fn mentorships() -> Vec<Value> {
    vec![
        json!({
            "_id": "men-001",
            "mentorName": "Asha Verma",
            "menteeName": "Farhan Ali",
            "menteeEmail": "farhan.ali@mitsgwl.ac.in",
            "topic": "Backend development",
            "message": "I would like guidance on system design interviews.",
            "status": "pending"
        }),
        json!({
            "_id": "men-002",
            "menteeName": "Harsh Patel",
            "topic": "Higher studies",
            "status": "approved"
        }),
    ]
}

fn registrations() -> Vec<Value> {
    vec![
        json!({
            "_id": "reg-001",
            "name": "Ishita Singh",
            "email": "ishita.singh@example.com",
            "userType": "alumni",
            "branch": "CSE",
            "batch": 2016,
            "submittedAt": "2025-06-01T12:00:00Z",
            "status": "pending"
        }),
        json!({
            "_id": "reg-002",
            "name": "Jay Mehta",
            "email": "jay.mehta@mitsgwl.ac.in",
            "userType": "student",
            "branch": "IT",
            "batch": 2027,
            "status": "pending"
        }),
    ]
}

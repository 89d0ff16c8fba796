//! What the list rows and the detail modal show for each kind.
//!
//! Detail data is frequently partial. Every accessor here degrades to
//! [`PLACEHOLDER`] instead of failing, so one incomplete record never breaks
//! the view.

use jiff::Timestamp;
use payloads::responses::{
    Alumni, Blog, Event, Job, MentorshipRequest, Profile, RegistrationRequest,
    Student,
};

use crate::entity::Moderated;

pub const PLACEHOLDER: &str = "Not provided";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    /// Render the value as a link.
    pub href: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: String,
    pub fields: Vec<DetailField>,
}

/// Presentation of an entity in list rows and in the detail modal.
pub trait Presentable: Moderated {
    /// Headers of the list table, excluding status and actions.
    fn columns() -> &'static [&'static str];

    /// One cell per column.
    fn row(&self) -> Vec<String>;

    /// Headline shown in the modal title.
    fn headline(&self) -> String;

    fn detail(&self) -> Vec<DetailSection>;
}

fn text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn required(value: &str) -> String {
    text(Some(value))
}

fn number(value: Option<u16>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

fn date(value: Option<Timestamp>) -> String {
    value.map_or_else(
        || PLACEHOLDER.to_string(),
        |ts| ts.strftime("%b %-d, %Y").to_string(),
    )
}

fn years(start: Option<u16>, end: Option<u16>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{s} – {e}"),
        (Some(s), None) => format!("{s} – present"),
        (None, Some(e)) => format!("until {e}"),
        (None, None) => PLACEHOLDER.to_string(),
    }
}

fn field(label: &'static str, value: String) -> DetailField {
    DetailField {
        label,
        value,
        href: false,
    }
}

fn link(label: &'static str, value: Option<&str>) -> DetailField {
    let value = text(value);
    let href = value != PLACEHOLDER;
    DetailField { label, value, href }
}

fn section(
    title: impl Into<String>,
    fields: Vec<DetailField>,
) -> DetailSection {
    DetailSection {
        title: title.into(),
        fields,
    }
}

fn profile_sections(profile: Option<&Profile>) -> Vec<DetailSection> {
    let Some(profile) = profile else {
        let bio = field("Bio", PLACEHOLDER.to_string());
        return vec![section("Profile", vec![bio])];
    };

    let mut sections = vec![section(
        "Profile",
        vec![
            field("Bio", text(profile.bio.as_deref())),
            field(
                "Skills",
                if profile.skills.is_empty() {
                    PLACEHOLDER.to_string()
                } else {
                    profile.skills.join(", ")
                },
            ),
        ],
    )];

    if profile.education.is_empty() {
        sections.push(section(
            "Education",
            vec![field("Institution", PLACEHOLDER.to_string())],
        ));
    }
    for (i, education) in profile.education.iter().enumerate() {
        sections.push(section(
            format!("Education {}", i + 1),
            vec![
                field("Institution", text(education.institution.as_deref())),
                field("Degree", text(education.degree.as_deref())),
                field("Field", text(education.field_of_study.as_deref())),
                field("Years", years(education.start_year, education.end_year)),
            ],
        ));
    }

    for (i, experience) in profile.experience.iter().enumerate() {
        sections.push(section(
            format!("Experience {}", i + 1),
            vec![
                field("Company", text(experience.company.as_deref())),
                field("Role", text(experience.role.as_deref())),
                field(
                    "Years",
                    years(experience.start_year, experience.end_year),
                ),
            ],
        ));
    }

    let links = profile.links.clone().unwrap_or_default();
    sections.push(section(
        "Links",
        vec![
            link("LinkedIn", links.linkedin.as_deref()),
            link("GitHub", links.github.as_deref()),
            link("Website", links.website.as_deref()),
        ],
    ));
    sections
}

impl Presentable for Alumni {
    fn columns() -> &'static [&'static str] {
        &["Name", "Email", "Branch", "Batch", "Company"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            required(&self.name),
            required(&self.email),
            text(self.branch.as_deref()),
            number(self.batch),
            text(self.company.as_deref()),
        ]
    }

    fn headline(&self) -> String {
        required(&self.name)
    }

    fn detail(&self) -> Vec<DetailSection> {
        let mut sections = vec![section(
            "Overview",
            vec![
                field("Email", required(&self.email)),
                field("Branch", text(self.branch.as_deref())),
                field("Batch", number(self.batch)),
                field("Location", text(self.location.as_deref())),
                field("Company", text(self.company.as_deref())),
                field("Designation", text(self.designation.as_deref())),
            ],
        )];
        sections.extend(profile_sections(self.profile.as_ref()));
        sections
    }
}

impl Presentable for Student {
    fn columns() -> &'static [&'static str] {
        &["Name", "Email", "Branch", "Batch", "Enrollment"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            required(&self.name),
            required(&self.email),
            text(self.branch.as_deref()),
            number(self.batch),
            text(self.enrollment_number.as_deref()),
        ]
    }

    fn headline(&self) -> String {
        required(&self.name)
    }

    fn detail(&self) -> Vec<DetailSection> {
        vec![section(
            "Overview",
            vec![
                field("Email", required(&self.email)),
                field("Phone", text(self.phone.as_deref())),
                field("Branch", text(self.branch.as_deref())),
                field("Batch", number(self.batch)),
                field("Enrollment", text(self.enrollment_number.as_deref())),
            ],
        )]
    }
}

impl Presentable for Job {
    fn columns() -> &'static [&'static str] {
        &["Title", "Company", "Location", "Type", "Posted"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            required(&self.title),
            text(self.company.as_deref()),
            text(self.location.as_deref()),
            text(self.job_type.as_deref()),
            date(self.created_at),
        ]
    }

    fn headline(&self) -> String {
        required(&self.title)
    }

    fn detail(&self) -> Vec<DetailSection> {
        vec![
            section(
                "Overview",
                vec![
                    field("Company", text(self.company.as_deref())),
                    field("Location", text(self.location.as_deref())),
                    field("Type", text(self.job_type.as_deref())),
                    field("Posted by", text(self.posted_by.as_deref())),
                    field("Posted", date(self.created_at)),
                    link("Apply", self.apply_link.as_deref()),
                ],
            ),
            section(
                "Description",
                vec![field("Description", text(self.description.as_deref()))],
            ),
        ]
    }
}

impl Presentable for Event {
    fn columns() -> &'static [&'static str] {
        &["Title", "Category", "Location", "Date"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            required(&self.title),
            text(self.category.as_deref()),
            text(self.location.as_deref()),
            date(self.starts_at),
        ]
    }

    fn headline(&self) -> String {
        required(&self.title)
    }

    fn detail(&self) -> Vec<DetailSection> {
        vec![section(
            "Overview",
            vec![
                field("Category", text(self.category.as_deref())),
                field("Location", text(self.location.as_deref())),
                field("Organizer", text(self.organizer.as_deref())),
                field("Date", date(self.starts_at)),
                field("Description", text(self.description.as_deref())),
            ],
        )]
    }
}

impl Presentable for Blog {
    fn columns() -> &'static [&'static str] {
        &["Title", "Author", "Category", "Created"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            required(&self.title),
            text(self.author.as_deref()),
            text(self.category.as_deref()),
            date(self.created_at),
        ]
    }

    fn headline(&self) -> String {
        required(&self.title)
    }

    fn detail(&self) -> Vec<DetailSection> {
        vec![
            section(
                "Overview",
                vec![
                    field("Author", text(self.author.as_deref())),
                    field("Category", text(self.category.as_deref())),
                    field("Created", date(self.created_at)),
                    field("Summary", text(self.summary.as_deref())),
                ],
            ),
            section(
                "Content",
                vec![field("Content", text(self.content.as_deref()))],
            ),
        ]
    }
}

impl Presentable for MentorshipRequest {
    fn columns() -> &'static [&'static str] {
        &["Mentee", "Mentor", "Topic"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            required(&self.mentee_name),
            text(self.mentor_name.as_deref()),
            text(self.topic.as_deref()),
        ]
    }

    fn headline(&self) -> String {
        format!("Mentorship for {}", required(&self.mentee_name))
    }

    fn detail(&self) -> Vec<DetailSection> {
        vec![section(
            "Request",
            vec![
                field("Mentee", required(&self.mentee_name)),
                field("Mentee email", text(self.mentee_email.as_deref())),
                field("Mentor", text(self.mentor_name.as_deref())),
                field("Topic", text(self.topic.as_deref())),
                field("Message", text(self.message.as_deref())),
            ],
        )]
    }
}

impl Presentable for RegistrationRequest {
    fn columns() -> &'static [&'static str] {
        &["Name", "Email", "Type", "Branch", "Batch", "Submitted"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            required(&self.name),
            required(&self.email),
            self.user_type
                .map_or_else(|| PLACEHOLDER.to_string(), |t| t.to_string()),
            text(self.branch.as_deref()),
            number(self.batch),
            date(self.submitted_at),
        ]
    }

    fn headline(&self) -> String {
        required(&self.name)
    }

    fn detail(&self) -> Vec<DetailSection> {
        vec![section(
            "Registration",
            vec![
                field("Email", required(&self.email)),
                field(
                    "Account type",
                    self.user_type.map_or_else(
                        || PLACEHOLDER.to_string(),
                        |t| t.to_string(),
                    ),
                ),
                field("Branch", text(self.branch.as_deref())),
                field("Batch", number(self.batch)),
                field("Submitted", date(self.submitted_at)),
            ],
        )]
    }
}

use payloads::{
    EntityId, EntityKind, ModerationStatus,
    responses::{
        Alumni, Blog, Event, Job, MentorshipRequest, RegistrationRequest,
        Student,
    },
};
use std::borrow::Cow;

/// How a facet filter compares its value against an entity's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetMatch {
    /// Byte-for-byte equality.
    Exact,
    /// Equality after trimming and lowercasing both sides.
    Normalized,
    /// Case-insensitive substring.
    Contains,
}

/// A filterable attribute of an entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facet {
    pub key: &'static str,
    pub label: &'static str,
    pub matching: FacetMatch,
}

const fn facet(
    key: &'static str,
    label: &'static str,
    matching: FacetMatch,
) -> Facet {
    Facet {
        key,
        label,
        matching,
    }
}

/// A record the moderation controller can list, filter and act on.
pub trait Moderated {
    const KIND: EntityKind;

    fn id(&self) -> &EntityId;
    fn status(&self) -> ModerationStatus;
    fn set_status(&mut self, status: ModerationStatus);

    /// Attributes searched by the free-text filter, in display order.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Value of the named facet, if the entity has one.
    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>>;

    /// The facets offered by this kind's screen.
    fn facets() -> &'static [Facet];
}

fn batch(batch: Option<u16>) -> Option<Cow<'static, str>> {
    batch.map(|b| Cow::Owned(b.to_string()))
}

fn present<'a>(
    fields: impl IntoIterator<Item = Option<&'a str>>,
) -> Vec<&'a str> {
    fields.into_iter().flatten().filter(|f| !f.is_empty()).collect()
}

macro_rules! status_accessors {
    () => {
        fn id(&self) -> &EntityId {
            &self.id
        }

        fn status(&self) -> ModerationStatus {
            self.status
        }

        fn set_status(&mut self, status: ModerationStatus) {
            self.status = status;
        }
    };
}

impl Moderated for Alumni {
    const KIND: EntityKind = EntityKind::Alumni;

    status_accessors!();

    fn searchable_fields(&self) -> Vec<&str> {
        present([
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            self.company.as_deref(),
            self.designation.as_deref(),
            self.location.as_deref(),
        ])
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "branch" => self.branch.as_deref().map(Cow::Borrowed),
            "batch" => batch(self.batch),
            "location" => self.location.as_deref().map(Cow::Borrowed),
            "company" => self.company.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        const FACETS: &[Facet] = &[
            facet("branch", "Branch", FacetMatch::Normalized),
            facet("batch", "Batch", FacetMatch::Exact),
            facet("location", "Location", FacetMatch::Contains),
            facet("company", "Company", FacetMatch::Contains),
        ];
        FACETS
    }
}

impl Moderated for Student {
    const KIND: EntityKind = EntityKind::Student;

    status_accessors!();

    fn searchable_fields(&self) -> Vec<&str> {
        present([
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            self.enrollment_number.as_deref(),
        ])
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "branch" => self.branch.as_deref().map(Cow::Borrowed),
            "batch" => batch(self.batch),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        const FACETS: &[Facet] = &[
            facet("branch", "Branch", FacetMatch::Normalized),
            facet("batch", "Batch", FacetMatch::Exact),
        ];
        FACETS
    }
}

impl Moderated for Job {
    const KIND: EntityKind = EntityKind::Job;

    status_accessors!();

    fn searchable_fields(&self) -> Vec<&str> {
        present([
            Some(self.title.as_str()),
            self.company.as_deref(),
            self.posted_by.as_deref(),
        ])
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "location" => self.location.as_deref().map(Cow::Borrowed),
            "job_type" => self.job_type.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        const FACETS: &[Facet] = &[
            facet("location", "Location", FacetMatch::Contains),
            facet("job_type", "Type", FacetMatch::Normalized),
        ];
        FACETS
    }
}

impl Moderated for Event {
    const KIND: EntityKind = EntityKind::Event;

    status_accessors!();

    fn searchable_fields(&self) -> Vec<&str> {
        present([
            Some(self.title.as_str()),
            self.organizer.as_deref(),
            self.description.as_deref(),
        ])
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "category" => self.category.as_deref().map(Cow::Borrowed),
            "location" => self.location.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        const FACETS: &[Facet] = &[
            facet("category", "Category", FacetMatch::Normalized),
            facet("location", "Location", FacetMatch::Contains),
        ];
        FACETS
    }
}

impl Moderated for Blog {
    const KIND: EntityKind = EntityKind::Blog;

    status_accessors!();

    fn searchable_fields(&self) -> Vec<&str> {
        present([
            Some(self.title.as_str()),
            self.author.as_deref(),
            self.summary.as_deref(),
        ])
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "category" => self.category.as_deref().map(Cow::Borrowed),
            "author" => self.author.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        const FACETS: &[Facet] = &[
            facet("category", "Category", FacetMatch::Normalized),
            facet("author", "Author", FacetMatch::Contains),
        ];
        FACETS
    }
}

impl Moderated for MentorshipRequest {
    const KIND: EntityKind = EntityKind::Mentorship;

    status_accessors!();

    fn searchable_fields(&self) -> Vec<&str> {
        present([
            Some(self.mentee_name.as_str()),
            self.mentee_email.as_deref(),
            self.mentor_name.as_deref(),
            self.topic.as_deref(),
        ])
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "topic" => self.topic.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        const FACETS: &[Facet] =
            &[facet("topic", "Topic", FacetMatch::Normalized)];
        FACETS
    }
}

impl Moderated for RegistrationRequest {
    const KIND: EntityKind = EntityKind::Registration;

    status_accessors!();

    fn searchable_fields(&self) -> Vec<&str> {
        present([Some(self.name.as_str()), Some(self.email.as_str())])
    }

    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "user_type" => self
                .user_type
                .map(|user_type| Cow::Owned(user_type.to_string())),
            "branch" => self.branch.as_deref().map(Cow::Borrowed),
            "batch" => batch(self.batch),
            _ => None,
        }
    }

    fn facets() -> &'static [Facet] {
        const FACETS: &[Facet] = &[
            facet("user_type", "Account type", FacetMatch::Normalized),
            facet("branch", "Branch", FacetMatch::Normalized),
            facet("batch", "Batch", FacetMatch::Exact),
        ];
        FACETS
    }
}

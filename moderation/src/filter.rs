//! Client-side narrowing of a fetched collection.
//!
//! Filtering is a pure function of the collection and a [`FilterState`]; it
//! never reorders, so the server's ordering survives.

use payloads::ModerationStatus;
use std::collections::{BTreeMap, BTreeSet};

use crate::entity::{Facet, FacetMatch, Moderated};

/// Which statuses the active tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab {
    #[default]
    All,
    Only(ModerationStatus),
}

impl StatusTab {
    pub fn admits(&self, status: ModerationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == status,
        }
    }

    /// Status passed to the server when querying this tab.
    pub fn query_status(&self) -> Option<ModerationStatus> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(*status),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    /// Facet key to selected value. Empty values are ignored.
    pub facets: BTreeMap<String, String>,
    pub tab: StatusTab,
}

impl FilterState {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_facet(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.facets.insert(key.into(), value.into());
        self
    }

    pub fn with_tab(mut self, tab: StatusTab) -> Self {
        self.tab = tab;
        self
    }

    /// Set or clear one facet. An empty value clears it.
    pub fn set_facet(&mut self, key: &str, value: String) {
        if value.is_empty() {
            self.facets.remove(key);
        } else {
            self.facets.insert(key.to_string(), value);
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || self.facets.values().any(|v| !v.is_empty())
    }
}

/// Whether one entity passes every active filter.
pub fn matches<E: Moderated>(entity: &E, state: &FilterState) -> bool {
    if !state.tab.admits(entity.status()) {
        return false;
    }

    let query = state.query.trim().to_lowercase();
    if !query.is_empty()
        && !entity
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    {
        return false;
    }

    state
        .facets
        .iter()
        .filter(|(_, wanted)| !wanted.is_empty())
        .all(|(key, wanted)| {
            let matching = E::facets()
                .iter()
                .find(|f| f.key == key.as_str())
                .map(|f| f.matching)
                .unwrap_or(FacetMatch::Exact);
            entity
                .facet_value(key)
                .is_some_and(|value| facet_matches(matching, &value, wanted))
        })
}

fn facet_matches(matching: FacetMatch, value: &str, wanted: &str) -> bool {
    match matching {
        FacetMatch::Exact => value == wanted,
        FacetMatch::Normalized => {
            value.trim().to_lowercase() == wanted.trim().to_lowercase()
        }
        FacetMatch::Contains => value
            .to_lowercase()
            .contains(&wanted.trim().to_lowercase()),
    }
}

/// The filtered view of a collection, in collection order.
pub fn apply<'a, E: Moderated>(
    items: &'a [E],
    state: &FilterState,
) -> Vec<&'a E> {
    items.iter().filter(|e| matches(*e, state)).collect()
}

/// Distinct values of a facet across a collection, sorted, for populating
/// dropdowns.
pub fn facet_options<E: Moderated>(items: &[E], facet: &Facet) -> Vec<String> {
    items
        .iter()
        .filter_map(|e| e.facet_value(facet.key))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{EntityId, responses::Alumni};

    fn alumni(
        id: &str,
        name: &str,
        email: &str,
        branch: &str,
        batch: u16,
        location: Option<&str>,
        status: ModerationStatus,
    ) -> Alumni {
        Alumni {
            id: EntityId::from(id),
            status,
            name: name.to_string(),
            email: email.to_string(),
            branch: Some(branch.to_string()),
            batch: Some(batch),
            location: location.map(str::to_string),
            company: None,
            designation: None,
            profile: None,
        }
    }

    fn sample() -> Vec<Alumni> {
        vec![
            alumni(
                "1",
                "Asha Verma",
                "a@mitsgwl.ac.in",
                "CSE",
                2019,
                Some("Gwalior"),
                ModerationStatus::Pending,
            ),
            alumni(
                "2",
                "Bharat Singh",
                "b@example.com",
                "ECE",
                2020,
                Some("Pune"),
                ModerationStatus::Approved,
            ),
            alumni(
                "3",
                "Chitra Rao",
                "c@example.com",
                "cse ",
                2020,
                None,
                ModerationStatus::Pending,
            ),
        ]
    }

    fn ids(items: &[&Alumni]) -> Vec<String> {
        items.iter().map(|a| a.id.0.clone()).collect()
    }

    #[test]
    fn empty_filter_matches_everything_in_order() {
        let items = sample();
        let filtered = apply(&items, &FilterState::default());
        assert_eq!(ids(&filtered), ["1", "2", "3"]);
    }

    #[test]
    fn free_text_is_case_insensitive_over_searchable_fields() {
        let items = sample();
        let filtered =
            apply(&items, &FilterState::default().with_query("GWAL"));
        assert_eq!(ids(&filtered), ["1"]);

        let filtered =
            apply(&items, &FilterState::default().with_query("example.com"));
        assert_eq!(ids(&filtered), ["2", "3"]);
    }

    #[test]
    fn blank_query_is_match_all() {
        let items = sample();
        let filtered = apply(&items, &FilterState::default().with_query("   "));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn facets_and_together() {
        let items = sample();
        let state = FilterState::default()
            .with_facet("branch", "CSE")
            .with_facet("batch", "2020");
        assert_eq!(ids(&apply(&items, &state)), ["3"]);
    }

    #[test]
    fn normalized_facet_ignores_case_and_padding() {
        let items = sample();
        let state = FilterState::default().with_facet("branch", "cse");
        assert_eq!(ids(&apply(&items, &state)), ["1", "3"]);
    }

    #[test]
    fn missing_facet_value_fails_an_active_facet() {
        let items = sample();
        let state = FilterState::default().with_facet("location", "pu");
        assert_eq!(ids(&apply(&items, &state)), ["2"]);
    }

    #[test]
    fn status_tab_narrows_view() {
        let items = sample();
        let state = FilterState::default()
            .with_tab(StatusTab::Only(ModerationStatus::Pending));
        assert_eq!(ids(&apply(&items, &state)), ["1", "3"]);
    }

    #[test]
    fn filtering_is_idempotent_and_a_subset() {
        let items = sample();
        let state = FilterState::default()
            .with_query("a")
            .with_facet("branch", "cse");
        let once: Vec<Alumni> =
            apply(&items, &state).into_iter().cloned().collect();
        let twice = apply(&once, &state);
        let expected: Vec<_> = once.iter().map(|a| a.id.0.clone()).collect();
        assert_eq!(ids(&twice), expected);
        assert!(once.iter().all(|a| items.contains(a)));
    }

    #[test]
    fn set_facet_with_empty_value_clears() {
        let mut state = FilterState::default().with_facet("branch", "CSE");
        assert!(state.is_active());
        state.set_facet("branch", String::new());
        assert!(!state.is_active());
    }

    #[test]
    fn facet_options_are_distinct_and_sorted() {
        let items = sample();
        let branch = Alumni::facets()[0];
        assert_eq!(facet_options(&items, &branch), ["CSE", "ECE", "cse"]);
        let batch = Alumni::facets()[1];
        assert_eq!(facet_options(&items, &batch), ["2019", "2020"]);
    }
}

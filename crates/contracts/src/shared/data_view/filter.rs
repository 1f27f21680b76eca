use std::collections::BTreeMap;

/// Reserved choice value meaning "no constraint". Never stored in
/// [`FilterState`]; selecting it removes the corresponding entry.
pub const ALL_SENTINEL: &str = "all";

/// Field accessors a row type exposes to the filter engine.
///
/// Returning `None` from an accessor means the record has no such field (or
/// the optional field is absent); an absent field never matches an active
/// predicate and never panics.
pub trait Queryable {
    /// Haystacks for the free-text predicate. The search term matches if it
    /// is a case-insensitive substring of any of them.
    fn search_fields(&self) -> Vec<String>;

    fn choice_field(&self, field: &str) -> Option<String>;

    fn numeric_field(&self, field: &str) -> Option<f64>;

    fn flag_field(&self, field: &str) -> Option<bool>;
}

/// Named numeric range: inclusive lower bound, exclusive upper bound.
/// `None` leaves that side open ("under-10k", "over-20k").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub key: &'static str,
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bucket {
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |m| value >= m) && self.max.map_or(true, |m| value < m)
    }
}

/// Fixed set of buckets over one numeric field of a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketSet {
    pub field: &'static str,
    pub buckets: &'static [Bucket],
}

impl BucketSet {
    pub fn get(&self, key: &str) -> Option<&'static Bucket> {
        self.buckets.iter().find(|b| b.key == key)
    }

    pub fn is_known(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Currently selected filter values of one list view.
///
/// Only active constraints are stored: an empty search string, a choice set
/// to the `"all"` sentinel or an unset flag simply have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text term matched against [`Queryable::search_fields`].
    pub search: String,

    /// field name → selected choice value (exact match)
    pub choices: BTreeMap<String, String>,

    /// field name → selected bucket key
    pub buckets: BTreeMap<String, String>,

    /// field name → required flag value
    pub flags: BTreeMap<String, bool>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.choices.is_empty()
            && self.buckets.is_empty()
            && self.flags.is_empty()
    }

    /// Number of active constraints, shown as the filter-panel badge.
    pub fn active_count(&self) -> usize {
        let search = usize::from(!self.search.trim().is_empty());
        search + self.choices.len() + self.buckets.len() + self.flags.len()
    }

    /// Select a choice value; the `"all"` sentinel clears the constraint.
    pub fn set_choice(&mut self, field: &str, value: &str) {
        if value == ALL_SENTINEL || value.is_empty() {
            self.choices.remove(field);
        } else {
            self.choices.insert(field.to_string(), value.to_string());
        }
    }

    /// Select a bucket, validated against its set. Returns `false` (state
    /// unchanged) for a key the set does not define — callers reject bad
    /// keys at the boundary instead of letting them reach the engine.
    pub fn set_bucket(&mut self, set: &BucketSet, key: &str) -> bool {
        if key == ALL_SENTINEL || key.is_empty() {
            self.buckets.remove(set.field);
            return true;
        }
        if !set.is_known(key) {
            return false;
        }
        self.buckets.insert(set.field.to_string(), key.to_string());
        true
    }

    pub fn set_flag(&mut self, field: &str, value: Option<bool>) {
        match value {
            Some(v) => {
                self.flags.insert(field.to_string(), v);
            }
            None => {
                self.flags.remove(field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.choices.clear();
        self.buckets.clear();
        self.flags.clear();
    }

    /// True iff the record satisfies every active predicate (AND across
    /// dimensions, OR across text fields).
    pub fn matches<T: Queryable>(&self, record: &T, bucket_sets: &[BucketSet]) -> bool {
        let term = self.search.trim().to_lowercase();
        if !term.is_empty() {
            let hit = record
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        for (field, want) in &self.choices {
            match record.choice_field(field) {
                Some(value) if &value == want => {}
                _ => return false,
            }
        }

        for (field, key) in &self.buckets {
            // A key that no set resolves cannot constrain anything; the
            // boundary is responsible for never storing one.
            let Some(bucket) = bucket_sets
                .iter()
                .find(|s| s.field == field)
                .and_then(|s| s.get(key))
            else {
                continue;
            };
            match record.numeric_field(field) {
                Some(value) if bucket.contains(value) => {}
                _ => return false,
            }
        }

        for (field, want) in &self.flags {
            match record.flag_field(field) {
                Some(value) if value == *want => {}
                _ => return false,
            }
        }

        true
    }
}

/// Keep only the records satisfying every active predicate.
/// An empty catalog yields an empty result, never an error.
pub fn filter_records<T: Queryable + Clone>(
    items: &[T],
    state: &FilterState,
    bucket_sets: &[BucketSet],
) -> Vec<T> {
    if state.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| state.matches(*item, bucket_sets))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: Option<String>,
        kind: &'static str,
        weight: f64,
    }

    impl Queryable for Row {
        fn search_fields(&self) -> Vec<String> {
            self.name.clone().into_iter().collect()
        }

        fn choice_field(&self, field: &str) -> Option<String> {
            (field == "kind").then(|| self.kind.to_string())
        }

        fn numeric_field(&self, field: &str) -> Option<f64> {
            (field == "weight").then_some(self.weight)
        }

        fn flag_field(&self, _field: &str) -> Option<bool> {
            None
        }
    }

    const WEIGHT_BUCKETS: BucketSet = BucketSet {
        field: "weight",
        buckets: &[
            Bucket { key: "light", label: "Light", min: None, max: Some(100.0) },
            Bucket { key: "heavy", label: "Heavy", min: Some(100.0), max: None },
        ],
    };

    #[test]
    fn test_sentinel_clears_choice() {
        let mut state = FilterState::default();
        state.set_choice("kind", "plastic");
        assert_eq!(state.active_count(), 1);
        state.set_choice("kind", ALL_SENTINEL);
        assert!(state.is_empty());
    }

    #[test]
    fn test_unknown_bucket_rejected_at_boundary() {
        let mut state = FilterState::default();
        assert!(!state.set_bucket(&WEIGHT_BUCKETS, "colossal"));
        assert!(state.is_empty());
        assert!(state.set_bucket(&WEIGHT_BUCKETS, "heavy"));
        assert_eq!(state.buckets.get("weight").map(String::as_str), Some("heavy"));
    }

    #[test]
    fn test_bucket_bounds_inclusive_exclusive() {
        let light = WEIGHT_BUCKETS.get("light").unwrap();
        let heavy = WEIGHT_BUCKETS.get("heavy").unwrap();
        assert!(light.contains(99.9));
        assert!(!light.contains(100.0));
        assert!(heavy.contains(100.0));
    }

    #[test]
    fn test_absent_text_field_never_matches_nor_panics() {
        let rows = vec![
            Row { name: None, kind: "metal", weight: 10.0 },
            Row { name: Some("Steel beam".into()), kind: "metal", weight: 500.0 },
        ];
        let mut state = FilterState::default();
        state.search = "steel".into();
        let out: Vec<_> = rows.iter().filter(|r| state.matches(*r, &[])).collect();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_flag_predicate_requires_known_field() {
        let row = Row { name: None, kind: "metal", weight: 10.0 };
        let mut state = FilterState::default();
        state.set_flag("starred", Some(true));
        // the row does not expose the flag at all -> non-matching
        assert!(!state.matches(&row, &[]));
    }
}

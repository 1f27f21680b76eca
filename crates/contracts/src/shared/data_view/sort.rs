use std::cmp::Ordering;

/// Row types compare themselves field-by-field for the sort stage.
pub trait Rankable {
    /// Ordering of `self` against `other` under the named sort field.
    /// Unknown fields compare equal, which keeps the input order.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Selected sort key and direction. `field: None` means "no sort": the
/// sequence keeps its insertion order. Kept apart from any bucket filter so
/// the two controls stay orthogonal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click behaviour: first click sorts ascending, a second click
    /// on the same field flips the direction.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn clear(&mut self) {
        self.field = None;
        self.direction = SortDirection::Ascending;
    }

    /// Direction if this state sorts by `field`, `None` otherwise.
    pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
        (self.field.as_deref() == Some(field)).then_some(self.direction)
    }
}

/// Pure sort stage: returns a new ordering, never mutates the caller's data.
/// The sort is stable, so equal keys keep their prior relative order.
pub fn sort_records<T: Rankable>(mut items: Vec<T>, sort: &SortState) -> Vec<T> {
    let Some(field) = sort.field.as_deref() else {
        return items;
    };
    match sort.direction {
        SortDirection::Ascending => items.sort_by(|a, b| a.compare_by_field(b, field)),
        SortDirection::Descending => items.sort_by(|a, b| b.compare_by_field(a, field)),
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        tag: &'static str,
        value: i64,
    }

    impl Rankable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "value" => self.value.cmp(&other.value),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { tag: "a", value: 2 },
            Row { tag: "b", value: 1 },
            Row { tag: "c", value: 2 },
            Row { tag: "d", value: 0 },
        ]
    }

    #[test]
    fn test_no_sort_keeps_insertion_order() {
        let out = sort_records(rows(), &SortState::default());
        assert_eq!(out, rows());
    }

    #[test]
    fn test_stable_sort_preserves_tie_order() {
        let sort = SortState {
            field: Some("value".into()),
            direction: SortDirection::Ascending,
        };
        let out = sort_records(rows(), &sort);
        let tags: Vec<&str> = out.iter().map(|r| r.tag).collect();
        // "a" stays ahead of "c" among the equal keys
        assert_eq!(tags, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_descending_reverses_comparison() {
        let sort = SortState {
            field: Some("value".into()),
            direction: SortDirection::Descending,
        };
        let out = sort_records(rows(), &sort);
        let values: Vec<i64> = out.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![2, 2, 1, 0]);
    }

    #[test]
    fn test_toggle_cycles_field_then_direction() {
        let mut sort = SortState::default();
        sort.toggle("value");
        assert_eq!(sort.direction_for("value"), Some(SortDirection::Ascending));
        sort.toggle("value");
        assert_eq!(sort.direction_for("value"), Some(SortDirection::Descending));
        sort.toggle("name");
        assert_eq!(sort.direction_for("name"), Some(SortDirection::Ascending));
        assert_eq!(sort.direction_for("value"), None);
    }
}

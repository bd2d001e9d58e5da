// Sort keys and comparison logic

use std::cmp::Ordering;

use crate::task::Task;

/// Which field a sort orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive lexicographic order on the task name.
    Name,
    /// Priority rank order: High, Medium, Low, then unrecognized values.
    Priority,
    /// Calendar order on the due date.
    DueDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub(crate) fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

/// Compare two tasks under the given key and direction.
///
/// Tasks whose sort key is undefined (an unrecognized priority, or a due date
/// that does not parse as YYYY-MM-DD) order after every task with a defined
/// key, in both directions; among themselves they compare equal, so a stable
/// sort keeps their prior relative order.
pub(crate) fn compare(key: SortKey, order: SortOrder, a: &Task, b: &Task) -> Ordering {
    match key {
        SortKey::Name => order.apply(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Priority => {
            let (ra, rb) = (a.priority.rank(), b.priority.rank());
            pin_undefined_last(order, (ra < 4).then_some(ra), (rb < 4).then_some(rb))
        }
        SortKey::DueDate => pin_undefined_last(order, a.due_date_parsed(), b.due_date_parsed()),
    }
}

fn pin_undefined_last<K: Ord>(order: SortOrder, a: Option<K>, b: Option<K>) -> Ordering {
    match (a, b) {
        (Some(ka), Some(kb)) => order.apply(ka.cmp(&kb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

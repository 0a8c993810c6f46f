//! Binding between a server-driven table and its host.
//!
//! The table never pages, sorts or filters rows itself. It renders the rows
//! it is given and reports user intent as [`TableEvent`]s; the host turns
//! those into new requests.

mod columns;
mod debounce;
mod pagination;

pub use columns::{golf_course_columns, render_rows, Column};
pub use debounce::{SearchDebouncer, SEARCH_DEBOUNCE};
pub use pagination::{PageTarget, PaginationControls};

pub use crate::models::SortDirection;
use crate::models::DEFAULT_SORT_FIELD;

/// User intent reported by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    PageChanged(u32),
    SortChanged {
        field: String,
        direction: SortDirection,
    },
    SearchChanged(String),
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub field: String,
    pub direction: SortDirection,
}

/// Single-column sort state held by the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    current: Option<ColumnSort>,
}

impl SortState {
    pub const fn current(&self) -> Option<&ColumnSort> {
        self.current.as_ref()
    }

    /// Header click: ascending, unless `field` is already ascending.
    pub fn toggle(&mut self, field: &str) -> TableEvent {
        let already_ascending = self
            .current
            .as_ref()
            .is_some_and(|sort| sort.field == field && sort.direction == SortDirection::Asc);
        let direction = if already_ascending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.current = Some(ColumnSort {
            field: field.to_string(),
            direction,
        });
        TableEvent::SortChanged {
            field: field.to_string(),
            direction,
        }
    }

    /// Clearing the selection falls back to the default column, ascending.
    pub fn clear(&mut self) -> TableEvent {
        self.current = None;
        TableEvent::SortChanged {
            field: DEFAULT_SORT_FIELD.to_string(),
            direction: SortDirection::Asc,
        }
    }
}

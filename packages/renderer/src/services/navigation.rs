//! Pagination state for the child list of the current node.

use serde::Serialize;

/// Default number of child rows the server returns per page
pub const ROWS_PER_PAGE: usize = 25;

/// Which pager button was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    First,
    Prev,
    Next,
    Last,
}

/// Request for the page-loading collaborator after a pager click
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub offset: usize,
    /// Ask the server to position on the final page (its offset is unknown here)
    pub go_to_last_page: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    pub main_offset: usize,
    pub end_reached: bool,
    pub rows_per_page: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            main_offset: 0,
            end_reached: true,
            rows_per_page: ROWS_PER_PAGE,
        }
    }
}

impl NavigationState {
    pub fn prev_page_exists(&self) -> bool {
        self.main_offset > 0
    }

    pub fn next_page_exists(&self) -> bool {
        !self.end_reached
    }

    /// Move the offset and describe the page that must be fetched.
    pub fn apply(&mut self, step: PageMove) -> PageRequest {
        let mut go_to_last_page = false;
        match step {
            PageMove::First => self.main_offset = 0,
            PageMove::Prev => {
                self.main_offset = self.main_offset.saturating_sub(self.rows_per_page);
            }
            PageMove::Next => self.main_offset += self.rows_per_page,
            PageMove::Last => go_to_last_page = true,
        }

        tracing::debug!(
            "Pager {:?}: offset={} go_to_last_page={}",
            step,
            self.main_offset,
            go_to_last_page
        );

        PageRequest {
            offset: self.main_offset,
            go_to_last_page,
        }
    }
}

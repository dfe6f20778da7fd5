//! Paged list state with fetch supersession.
//!
//! Fetches are tagged with an epoch when they start. A response is only
//! applied when its epoch is still the current one, so a stale response
//! that lost the race (even if its abort did not land in time) can never
//! overwrite the rows of a newer search.

/// Rows requested per page; a short page means the collection is exhausted.
pub const PAGE_SIZE: usize = 10;

/// Proof that a fetch was started, carried through to its completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
    append: bool,
}

impl FetchTicket {
    pub fn append(&self) -> bool {
        self.append
    }
}

/// Accumulated rows plus paging and in-flight bookkeeping.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    page: usize,
    has_more: bool,
    loading: bool,
    epoch: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            has_more: true,
            loading: true,
            epoch: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Start a fetch, superseding any in-flight one.
    pub fn begin(&mut self, append: bool) -> FetchTicket {
        self.epoch += 1;
        self.loading = true;
        FetchTicket {
            epoch: self.epoch,
            append,
        }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.epoch == ticket.epoch
    }

    /// Apply a page of rows. Stale tickets are dropped without touching
    /// anything.
    pub fn complete(&mut self, ticket: FetchTicket, rows: Vec<T>) {
        if !self.is_current(ticket) {
            return;
        }
        self.has_more = rows.len() == PAGE_SIZE;
        if ticket.append {
            self.items.extend(rows);
        } else {
            self.items = rows;
        }
        self.loading = false;
    }

    /// A failed fetch keeps the last good rows on screen; only the
    /// loading flag settles.
    pub fn fail(&mut self, ticket: FetchTicket) {
        if self.is_current(ticket) {
            self.loading = false;
        }
    }

    /// A cancelled fetch was superseded on purpose; nothing to show.
    pub fn settle_cancelled(&mut self, ticket: FetchTicket) {
        if self.is_current(ticket) {
            self.loading = false;
        }
    }

    /// Fold a server-updated row into the first matching one; at most one
    /// row changes. A row that left the list since the save started is
    /// simply not there to update.
    pub fn merge_row(&mut self, matches: impl Fn(&T) -> bool, merge: impl FnOnce(&mut T)) {
        if let Some(row) = self.items.iter_mut().find(|row| matches(row)) {
            merge(row);
        }
    }

    pub fn advance_page(&mut self) {
        self.page += 1;
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<i64> {
        (0..n as i64).collect()
    }

    #[test]
    fn full_page_means_more_pages_short_page_means_end() {
        let mut state = ListState::default();
        let ticket = state.begin(false);
        state.complete(ticket, rows(PAGE_SIZE));
        assert!(state.has_more());

        let ticket = state.begin(true);
        state.complete(ticket, rows(3));
        assert!(!state.has_more());
        assert!(!state.loading());
    }

    #[test]
    fn append_extends_and_replace_overwrites() {
        let mut state = ListState::default();
        let ticket = state.begin(false);
        state.complete(ticket, rows(PAGE_SIZE));

        let ticket = state.begin(true);
        state.complete(ticket, rows(4));
        assert_eq!(state.items.len(), PAGE_SIZE + 4);

        let ticket = state.begin(false);
        state.complete(ticket, rows(2));
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = ListState::default();
        let stale = state.begin(false);
        let fresh = state.begin(false);
        state.complete(fresh, vec![10, 20]);
        // The stale page arrives afterwards and must not win.
        state.complete(stale, rows(PAGE_SIZE));
        assert_eq!(state.items, vec![10, 20]);
        assert!(!state.has_more());
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut state = ListState::default();
        let ticket = state.begin(false);
        state.complete(ticket, vec![1, 2, 3]);

        let ticket = state.begin(false);
        state.fail(ticket);
        assert_eq!(state.items, vec![1, 2, 3]);
        assert!(!state.loading());
    }

    #[test]
    fn stale_failure_does_not_clear_loading_of_newer_fetch() {
        let mut state = ListState::<i64>::default();
        let stale = state.begin(false);
        let _fresh = state.begin(false);
        state.fail(stale);
        assert!(state.loading());
    }

    #[test]
    fn cancelled_fetch_settles_quietly() {
        let mut state = ListState::default();
        let ticket = state.begin(false);
        state.complete(ticket, vec![7]);

        let ticket = state.begin(true);
        state.settle_cancelled(ticket);
        assert_eq!(state.items, vec![7]);
        assert!(!state.loading());
    }

    #[test]
    fn merge_touches_exactly_the_first_matching_row() {
        let mut state = ListState::default();
        let ticket = state.begin(false);
        state.complete(ticket, vec![1, 2, 2]);

        state.merge_row(|&row| row == 2, |row| *row = 9);
        assert_eq!(state.items, vec![1, 9, 2]);

        state.merge_row(|&row| row == 7, |row| *row = 0);
        assert_eq!(state.items, vec![1, 9, 2]);
    }

    #[test]
    fn paging_counters() {
        let mut state = ListState::<i64>::default();
        assert_eq!(state.page(), 1);
        state.advance_page();
        state.advance_page();
        assert_eq!(state.page(), 3);
        state.reset_page();
        assert_eq!(state.page(), 1);
    }
}

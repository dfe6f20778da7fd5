//! Search, paging and inline-edit machinery shared by the tracking pages.

pub mod controller;
pub mod criteria;
pub mod debounce;
pub mod draft;
pub mod sentinel;
pub mod state;

pub use controller::{ListController, TrackedCollection};
pub use criteria::SearchCriteria;
pub use draft::{EditSession, LineItemDraft, Suggestions};
pub use sentinel::ScrollSentinel;
pub use state::{FetchTicket, ListState, PAGE_SIZE};

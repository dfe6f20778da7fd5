//! Generic controller behind every tracking page.
//!
//! The five tracked collections (dispatches, credit notes, internal
//! consumptions, productions, receipts) share the same page mechanics:
//! debounced search over a fixed filter set, infinite scroll in pages of
//! ten, one inline edit draft at a time, and save/delete against the
//! collection's REST path. Each collection implements [`TrackedCollection`]
//! and everything else lives here once.

use std::marker::PhantomData;

use contracts::domain::line_item::LineItem;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api::{Api, RequestHandle};
use crate::shared::dom;
use crate::shared::list_controller::criteria::SearchCriteria;
use crate::shared::list_controller::debounce::{Debouncer, DEBOUNCE_MS};
use crate::shared::list_controller::draft::{self, EditSession, LineItemDraft, Suggestions};
use crate::shared::list_controller::state::{FetchTicket, ListState};

/// Dropdown length cap for product suggestions.
const MAX_SUGGESTIONS: usize = 5;

/// What a collection must provide to get a full tracking page.
pub trait TrackedCollection: 'static {
    /// Row as the backend lists it.
    type Summary: Clone + DeserializeOwned + Send + Sync + 'static;
    /// Editable copy of a row.
    type Draft: LineItemDraft + Clone + Default + Send + Sync + 'static;
    /// Body of the update request.
    type SavePayload: Serialize + 'static;

    /// REST path, e.g. `/dispatches`.
    const PATH: &'static str;
    /// Filter fields, in the order the search bar shows them.
    const FILTER_FIELDS: &'static [&'static str];

    const LOAD_ERROR: &'static str;
    const SAVE_ERROR: &'static str;
    const SAVED_MESSAGE: &'static str;
    const DELETE_ERROR: &'static str;
    const DELETED_MESSAGE: &'static str;
    const CONFIRM_DELETE: &'static str;

    fn id(summary: &Self::Summary) -> i64;
    fn draft(summary: &Self::Summary) -> Self::Draft;
    fn payload(draft: &Self::Draft) -> Self::SavePayload;
    /// Fold the server's updated row back into the listed one.
    fn absorb(summary: &mut Self::Summary, updated: Self::Summary);
}

/// Reactive state shared by a tracking page and its child components.
pub struct ListController<C: TrackedCollection> {
    api: Api,
    /// What the inputs show, updated on every keystroke.
    pub criteria: RwSignal<SearchCriteria>,
    /// What the last fetch used; trails `criteria` by the debounce delay.
    snapshot: RwSignal<SearchCriteria>,
    pub state: RwSignal<ListState<C::Summary>>,
    pub edit: RwSignal<EditSession<C::Draft>>,
    pub suggestions: RwSignal<Suggestions>,
    /// Status line under the search bar (load errors, save confirmations).
    pub message: RwSignal<Option<String>>,
    product_names: RwSignal<Vec<String>>,
    debounce: Debouncer,
    live: StoredValue<Option<RequestHandle>, LocalStorage>,
    _collection: PhantomData<C>,
}

impl<C: TrackedCollection> Clone for ListController<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TrackedCollection> Copy for ListController<C> {}

impl<C: TrackedCollection> ListController<C> {
    pub fn new(api: Api) -> Self {
        let controller = Self {
            api,
            criteria: RwSignal::new(SearchCriteria::new(C::FILTER_FIELDS)),
            snapshot: RwSignal::new(SearchCriteria::new(C::FILTER_FIELDS)),
            state: RwSignal::new(ListState::default()),
            edit: RwSignal::new(EditSession::default()),
            suggestions: RwSignal::new(Suggestions::default()),
            message: RwSignal::new(None),
            product_names: RwSignal::new(Vec::new()),
            debounce: Debouncer::new(),
            live: StoredValue::new_local(None),
            _collection: PhantomData,
        };

        // Initial load plus one reload per settled search change.
        Effect::new(move |_| {
            let snapshot = controller.snapshot.get();
            controller.state.update(|state| state.reset_page());
            controller.spawn_fetch(snapshot, 1, false);
        });

        controller.refresh_product_names();
        controller
    }

    /// Keystroke in a filter input: reflect it immediately, search later.
    pub fn set_filter(&self, name: &'static str, value: String) {
        self.criteria
            .update(|criteria| criteria.set(name, value));
        let criteria = self.criteria;
        let snapshot = self.snapshot;
        self.debounce.call(DEBOUNCE_MS, move || {
            snapshot.set(criteria.get_untracked());
        });
    }

    /// Explicit submit (enter key, search button) skips the debounce.
    pub fn submit_now(&self) {
        self.debounce.cancel();
        self.snapshot.set(self.criteria.get_untracked());
    }

    /// Sentinel became visible: fetch the next page, appending.
    pub fn load_more(&self) {
        let (loading, has_more) = self
            .state
            .with_untracked(|state| (state.loading(), state.has_more()));
        if loading || !has_more {
            return;
        }
        self.state.update(|state| state.advance_page());
        let page = self.state.with_untracked(|state| state.page());
        self.spawn_fetch(self.snapshot.get_untracked(), page, true);
    }

    fn spawn_fetch(&self, criteria: SearchCriteria, page: usize, append: bool) {
        // A new search supersedes whatever is in flight. Appends never
        // race with each other because load_more is gated on loading.
        let previous = self.live.try_update_value(|live| live.take()).flatten();
        if let Some(handle) = previous {
            handle.abort();
        }
        let handle = RequestHandle::new();
        self.live.set_value(Some(handle.clone()));

        // Replacing the rows resets the scroll; put the user back where
        // they were once the new rows land.
        let scroll = (!append).then(dom::scroll_offset);

        let ticket = match self
            .state
            .try_update(|state| state.begin(append))
        {
            Some(ticket) => ticket,
            None => return,
        };

        let controller = *self;
        let path = format!("{}{}", C::PATH, criteria.to_query(page));
        spawn_local(async move {
            let result = controller
                .api
                .get_json_with::<Vec<C::Summary>>(&path, &handle)
                .await;
            controller.settle_fetch(ticket, result, scroll);
        });
    }

    fn settle_fetch(
        &self,
        ticket: FetchTicket,
        result: Result<Vec<C::Summary>, crate::shared::api::ApiError>,
        scroll: Option<f64>,
    ) {
        let current = self
            .state
            .with_untracked(|state| state.is_current(ticket));
        match result {
            Ok(rows) => {
                self.state.update(|state| state.complete(ticket, rows));
                if current {
                    self.message.set(None);
                    if let Some(y) = scroll {
                        dom::restore_scroll(y);
                    }
                }
            }
            Err(error) if error.is_cancelled() => {
                self.state
                    .update(|state| state.settle_cancelled(ticket));
            }
            Err(_) => {
                self.state.update(|state| state.fail(ticket));
                if current {
                    self.message.set(Some(C::LOAD_ERROR.to_string()));
                }
            }
        }
    }

    pub fn start_edit(&self, summary: &C::Summary) {
        let id = C::id(summary);
        let draft = C::draft(summary);
        self.suggestions.update(|s| s.clear_all());
        self.edit.update(|session| session.start(id, draft));
    }

    pub fn cancel_edit(&self) {
        self.suggestions.update(|s| s.clear_all());
        self.edit.update(|session| session.cancel());
    }

    pub fn update_draft(&self, update: impl FnOnce(&mut C::Draft)) {
        self.edit.update(|session| {
            if let Some(draft) = session.draft_mut() {
                update(draft);
            }
        });
    }

    pub fn add_item(&self) {
        self.edit
            .update(|session| session.add_item(LineItem::blank()));
    }

    pub fn remove_item(&self, index: usize) {
        self.edit.update(|session| session.remove_item(index));
        self.suggestions.update(|s| s.clear(index));
    }

    pub fn update_item(&self, index: usize, update: impl FnOnce(&mut LineItem)) {
        self.edit
            .update(|session| session.update_item(index, update));
    }

    /// Typed in a product-name cell: match against the product registry.
    pub fn suggest(&self, row: usize, input: &str) {
        let matches = self
            .product_names
            .with_untracked(|names| draft::filter_matches(names, input, MAX_SUGGESTIONS));
        self.suggestions.update(|s| s.set(row, matches));
    }

    pub fn pick_suggestion(&self, row: usize, name: String) {
        self.update_item(row, |item| item.name = name);
        self.suggestions.update(|s| s.clear(row));
    }

    pub fn save(&self) {
        let Some(id) = self.edit.with_untracked(|session| session.editing_id()) else {
            return;
        };
        let Some(payload) = self
            .edit
            .with_untracked(|session| session.draft().map(C::payload))
        else {
            return;
        };

        let controller = *self;
        spawn_local(async move {
            let path = format!("{}/{}", C::PATH, id);
            match controller
                .api
                .put_json::<C::SavePayload, C::Summary>(&path, &payload)
                .await
            {
                Ok(updated) => {
                    controller.state.update(|state| {
                        state.merge_row(|row| C::id(row) == id, |row| C::absorb(row, updated));
                    });
                    controller.cancel_edit();
                    controller
                        .message
                        .set(Some(C::SAVED_MESSAGE.to_string()));
                }
                Err(error) => {
                    // Stay in edit mode so nothing typed is lost.
                    dom::alert(&error.message_or(C::SAVE_ERROR));
                }
            }
        });
    }

    pub fn delete(&self, id: i64) {
        if !dom::confirm(C::CONFIRM_DELETE) {
            return;
        }
        let controller = *self;
        spawn_local(async move {
            let path = format!("{}/{}", C::PATH, id);
            match controller.api.delete(&path).await {
                Ok(()) => {
                    controller.state.update(|state| {
                        state.items.retain(|row| C::id(row) != id);
                    });
                    controller.edit.update(|session| session.cancel_if(id));
                    controller
                        .message
                        .set(Some(C::DELETED_MESSAGE.to_string()));
                }
                Err(error) => {
                    dom::alert(&error.message_or(C::DELETE_ERROR));
                }
            }
        });
    }

    fn refresh_product_names(&self) {
        let api = self.api;
        let product_names = self.product_names;
        spawn_local(async move {
            if let Ok(products) = api.get_json::<Vec<Product>>("/products").await {
                product_names.set(products.into_iter().map(|p| p.name).collect());
            }
        });
    }
}

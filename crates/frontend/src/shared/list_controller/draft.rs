//! Inline edit drafts and per-row product suggestions.

use std::collections::HashMap;

use contracts::domain::line_item::LineItem;

/// Drafts expose their line items so the controller can edit them
/// without knowing the rest of the entity's shape.
pub trait LineItemDraft {
    fn items(&self) -> &Vec<LineItem>;
    fn items_mut(&mut self) -> &mut Vec<LineItem>;
}

/// At most one row of a list is in edit mode at a time. Starting an edit
/// while another is open discards the previous draft.
#[derive(Clone, Debug, Default)]
pub struct EditSession<D> {
    editing: Option<(i64, D)>,
}

impl<D: LineItemDraft> EditSession<D> {
    pub fn start(&mut self, id: i64, draft: D) {
        self.editing = Some((id, draft));
    }

    pub fn cancel(&mut self) {
        self.editing = None;
    }

    /// Drop the draft only if it belongs to the given row; editing an
    /// unrelated row survives, e.g. when another record is deleted.
    pub fn cancel_if(&mut self, id: i64) {
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
    }

    pub fn is_editing(&self, id: i64) -> bool {
        matches!(self.editing, Some((editing_id, _)) if editing_id == id)
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|(id, _)| *id)
    }

    pub fn draft(&self) -> Option<&D> {
        self.editing.as_ref().map(|(_, draft)| draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        self.editing.as_mut().map(|(_, draft)| draft)
    }

    pub fn add_item(&mut self, item: LineItem) {
        if let Some(draft) = self.draft_mut() {
            draft.items_mut().push(item);
        }
    }

    pub fn remove_item(&mut self, index: usize) {
        if let Some(draft) = self.draft_mut() {
            let items = draft.items_mut();
            if index < items.len() {
                items.remove(index);
            }
        }
    }

    pub fn update_item(&mut self, index: usize, update: impl FnOnce(&mut LineItem)) {
        if let Some(draft) = self.draft_mut() {
            if let Some(item) = draft.items_mut().get_mut(index) {
                update(item);
            }
        }
    }
}

/// Case-insensitive substring match over the product registry, capped at
/// `max` results. Blank input matches nothing.
pub fn filter_matches(names: &[String], input: &str, max: usize) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(max)
        .cloned()
        .collect()
}

/// Product name suggestions keyed by the line-item row they were typed in,
/// so typing in one row never shows a dropdown under another.
#[derive(Clone, Debug, Default)]
pub struct Suggestions {
    by_row: HashMap<usize, Vec<String>>,
}

impl Suggestions {
    pub fn set(&mut self, row: usize, names: Vec<String>) {
        if names.is_empty() {
            self.by_row.remove(&row);
        } else {
            self.by_row.insert(row, names);
        }
    }

    pub fn clear(&mut self, row: usize) {
        self.by_row.remove(&row);
    }

    pub fn clear_all(&mut self) {
        self.by_row.clear();
    }

    pub fn get(&self, row: usize) -> Vec<String> {
        self.by_row.get(&row).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::line_item::DEFAULT_UNIT;

    #[derive(Clone, Debug, Default)]
    struct Draft {
        items: Vec<LineItem>,
    }

    impl LineItemDraft for Draft {
        fn items(&self) -> &Vec<LineItem> {
            &self.items
        }
        fn items_mut(&mut self) -> &mut Vec<LineItem> {
            &mut self.items
        }
    }

    fn item(name: &str) -> LineItem {
        LineItem {
            name: name.to_string(),
            quantity: 1.0,
            unit: DEFAULT_UNIT.to_string(),
        }
    }

    #[test]
    fn starting_a_second_edit_replaces_the_first_draft() {
        let mut session = EditSession::default();
        session.start(1, Draft { items: vec![item("caja")] });
        session.start(2, Draft::default());

        assert!(!session.is_editing(1));
        assert!(session.is_editing(2));
        assert!(session.draft().unwrap().items().is_empty());
    }

    #[test]
    fn deleting_the_edited_row_clears_the_session() {
        let mut session = EditSession::default();
        session.start(5, Draft::default());
        session.cancel_if(5);
        assert_eq!(session.editing_id(), None);
    }

    #[test]
    fn deleting_another_row_keeps_the_draft() {
        let mut session = EditSession::default();
        session.start(5, Draft { items: vec![item("sal")] });
        session.cancel_if(3);
        assert!(session.is_editing(5));
        assert_eq!(session.draft().unwrap().items().len(), 1);
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut session = EditSession::default();
        session.start(5, Draft::default());
        session.cancel();
        assert_eq!(session.editing_id(), None);
        assert!(session.draft().is_none());
    }

    #[test]
    fn item_edits_only_touch_the_addressed_row() {
        let mut session = EditSession::default();
        session.start(
            1,
            Draft {
                items: vec![item("harina"), item("sal")],
            },
        );
        session.update_item(1, |li| li.quantity = 4.5);
        session.add_item(item("azúcar"));

        let items = session.draft().unwrap().items();
        assert_eq!(items[0].quantity, 1.0);
        assert_eq!(items[1].quantity, 4.5);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut session = EditSession::default();
        session.start(1, Draft { items: vec![item("sal")] });
        session.remove_item(7);
        assert_eq!(session.draft().unwrap().items().len(), 1);
    }

    #[test]
    fn suggestions_stay_scoped_to_their_row() {
        let mut suggestions = Suggestions::default();
        suggestions.set(0, vec!["Harina".to_string()]);
        suggestions.set(2, vec!["Sal fina".to_string(), "Sal gruesa".to_string()]);

        assert_eq!(suggestions.get(0).len(), 1);
        assert!(suggestions.get(1).is_empty());
        suggestions.clear(2);
        assert!(suggestions.get(2).is_empty());
        assert_eq!(suggestions.get(0).len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive_and_capped() {
        let names: Vec<String> = ["Harina 25kg", "harina integral", "Sal fina", "Azúcar"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(filter_matches(&names, "HAR", 5).len(), 2);
        assert_eq!(filter_matches(&names, "har", 1).len(), 1);
        assert!(filter_matches(&names, "  ", 5).is_empty());
        assert!(filter_matches(&names, "queso", 5).is_empty());
    }

    #[test]
    fn empty_result_clears_the_row() {
        let mut suggestions = Suggestions::default();
        suggestions.set(3, vec!["Caja".to_string()]);
        suggestions.set(3, Vec::new());
        assert!(suggestions.get(3).is_empty());
    }
}

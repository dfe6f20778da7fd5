//! Search criteria for the tracking pages.
//!
//! Every collection declares its filter fields once; the criteria keeps a
//! value for each of them at all times, so the query string the backend
//! receives always carries the full set (empty values included).

use crate::shared::list_controller::state::PAGE_SIZE;

/// Ordered set of filter fields with their current values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCriteria {
    fields: Vec<(&'static str, String)>,
}

impl SearchCriteria {
    /// All fields start empty, which the backend treats as "no filter".
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            fields: names.iter().map(|name| (*name, String::new())).collect(),
        }
    }

    pub fn set(&mut self, name: &str, value: String) {
        if let Some(entry) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        }
    }

    pub fn get(&self, name: &str) -> String {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    /// Query string for one page of results, e.g.
    /// `?cliente=Acme&orden=&page=2&limit=10`.
    pub fn to_query(&self, page: usize) -> String {
        let mut query = String::from("?");
        for (name, value) in &self.fields {
            query.push_str(name);
            query.push('=');
            query.push_str(&urlencoding::encode(value));
            query.push('&');
        }
        query.push_str(&format!("page={}&limit={}", page, PAGE_SIZE));
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_every_field_empty() {
        let criteria = SearchCriteria::new(&["cliente", "orden"]);
        assert_eq!(criteria.get("cliente"), "");
        assert_eq!(criteria.get("orden"), "");
    }

    #[test]
    fn query_keeps_empty_fields_and_appends_paging() {
        let mut criteria = SearchCriteria::new(&["cliente", "orden"]);
        criteria.set("cliente", "Acme".to_string());
        assert_eq!(criteria.to_query(2), "?cliente=Acme&orden=&page=2&limit=10");
    }

    #[test]
    fn values_are_url_encoded() {
        let mut criteria = SearchCriteria::new(&["cliente"]);
        criteria.set("cliente", "Pérez & Cía".to_string());
        assert_eq!(
            criteria.to_query(1),
            "?cliente=P%C3%A9rez%20%26%20C%C3%ADa&page=1&limit=10"
        );
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut criteria = SearchCriteria::new(&["cliente"]);
        criteria.set("nope", "x".to_string());
        assert_eq!(criteria.to_query(1), "?cliente=&page=1&limit=10");
    }
}

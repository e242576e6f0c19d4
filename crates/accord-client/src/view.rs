//! State model for the MSA list page.
//!
//! `MsaListView` owns the rows on screen, the page query and the UI flags
//! (loading, error, success, delete confirmation, reload). Every operation
//! takes `&mut self`, so only one request is ever in flight per view.

use std::future::Future;

use accord_core::entities::Msa;
use accord_core::query::ListQuery;
use accord_core::responses::ListResponse;

use crate::client::ApiClient;
use crate::error::ClientError;

/// The two API calls the list page needs.
pub trait MsaApi {
    fn list_msas(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = Result<ListResponse<Msa>, ClientError>> + Send;

    fn delete_msa(&self, id: i64) -> impl Future<Output = Result<(), ClientError>> + Send;
}

impl MsaApi for ApiClient {
    async fn list_msas(&self, query: &ListQuery) -> Result<ListResponse<Msa>, ClientError> {
        Self::list_msas(self, query).await
    }

    async fn delete_msa(&self, id: i64) -> Result<(), ClientError> {
        Self::delete_msa(self, id).await
    }
}

#[derive(Debug)]
pub struct MsaListView<A> {
    api: A,
    items: Vec<Msa>,
    total: u64,
    page_size: u32,
    query: ListQuery,
    loading: bool,
    error: Option<String>,
    success: Option<String>,
    pending_delete: Option<i64>,
    reload: bool,
}

impl<A: MsaApi> MsaListView<A> {
    /// A view on the first page. Nothing is fetched until [`Self::load`].
    pub fn new(api: A, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        Self {
            api,
            items: Vec::new(),
            total: 0,
            page_size,
            query: ListQuery::page(0, page_size),
            loading: false,
            error: None,
            success: None,
            pending_delete: None,
            reload: false,
        }
    }

    /// Fetch the current page.
    ///
    /// On failure `error` is set and the previous rows stay on screen. The
    /// page size follows the `limit` the server actually applied. If the
    /// current page has become empty (e.g. its last row was deleted) the view
    /// steps back to the last non-empty page, or to the first page when
    /// nothing is left.
    pub async fn load(&mut self) {
        self.loading = true;
        let mut result = self.api.list_msas(&self.query).await;

        if let Ok(page) = &result {
            self.adopt_limit(page.limit);
            if page.data.is_empty() && self.query.skip > 0 {
                self.query.skip = self.last_page_skip(page.total);
                if page.total > 0 {
                    result = self.api.list_msas(&self.query).await;
                }
            }
        }

        match result {
            Ok(page) => {
                self.items = page.data;
                self.total = page.total;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load MSAs");
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    /// Open the delete confirmation for `id`.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
        self.success = None;
        self.error = None;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the row awaiting confirmation. The confirmation closes either way.
    ///
    /// Returns `false` if nothing was awaiting confirmation.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };
        match self.api.delete_msa(id).await {
            Ok(()) => {
                self.success = Some(format!("MSA {id} deleted successfully."));
                self.error = None;
                self.reload = true;
            }
            Err(e) => {
                self.success = None;
                self.error = Some(format!("Failed to delete MSA {id}: {e}"));
            }
        }
        true
    }

    /// Re-fetch if a reload was requested. Returns whether a fetch happened.
    pub async fn refresh(&mut self) -> bool {
        if !self.reload {
            return false;
        }
        self.reload = false;
        self.load().await;
        true
    }

    /// Advance one page unless already on the last one.
    pub async fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.query.skip += self.page_size;
        self.load().await;
        true
    }

    /// Go back one page unless already on the first one.
    pub async fn prev_page(&mut self) -> bool {
        if self.query.skip == 0 {
            return false;
        }
        self.query.skip = self.query.skip.saturating_sub(self.page_size);
        self.load().await;
        true
    }

    /// Filter by `term` (blank clears the filter) and return to the first page.
    pub async fn set_search(&mut self, term: &str) {
        let term = term.trim();
        self.query.search = (!term.is_empty()).then(|| term.to_string());
        self.query.skip = 0;
        self.load().await;
    }

    /// Order by a `column:direction` expression and return to the first page.
    pub async fn set_sort(&mut self, sortby: &str) {
        self.query.sortby = Some(sortby.to_string());
        self.query.skip = 0;
        self.load().await;
    }

    pub fn dismiss_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    /// The server caps `limit`; page with the size it used.
    fn adopt_limit(&mut self, limit: u32) {
        if limit > 0 && limit != self.page_size {
            self.page_size = limit;
            self.query.limit = Some(limit);
        }
    }

    fn last_page_skip(&self, total: u64) -> u32 {
        let last = (total.saturating_sub(1) / u64::from(self.page_size)) * u64::from(self.page_size);
        u32::try_from(last).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        u64::from(self.query.skip) + u64::from(self.page_size) < self.total
    }

    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.query.skip > 0
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.query.skip / self.page_size + 1
    }

    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(self.page_size)).max(1)
    }

    #[must_use]
    pub fn items(&self) -> &[Msa] {
        &self.items
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    #[must_use]
    pub const fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    #[must_use]
    pub const fn needs_reload(&self) -> bool {
        self.reload
    }

    pub const fn api(&self) -> &A {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    use super::*;

    /// In-memory stand-in for the API: a sorted list of MSAs plus failure switches.
    #[derive(Default)]
    struct FakeApi {
        rows: Mutex<Vec<Msa>>,
        fail_list: Mutex<bool>,
        list_calls: Mutex<u32>,
        max_limit: Option<u32>,
    }

    fn msa(id: i64) -> Msa {
        Msa {
            id,
            title: format!("MSA {id}"),
            vendor_id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            document: None,
            metadata: None,
        }
    }

    impl FakeApi {
        fn with_rows(n: i64) -> Self {
            let api = Self::default();
            *api.rows.lock().unwrap() = (1..=n).map(msa).collect();
            api
        }

        fn capped(n: i64, max_limit: u32) -> Self {
            Self {
                max_limit: Some(max_limit),
                ..Self::with_rows(n)
            }
        }

        fn calls(&self) -> u32 {
            *self.list_calls.lock().unwrap()
        }
    }

    impl MsaApi for FakeApi {
        async fn list_msas(&self, query: &ListQuery) -> Result<ListResponse<Msa>, ClientError> {
            *self.list_calls.lock().unwrap() += 1;
            if *self.fail_list.lock().unwrap() {
                return Err(ClientError::Api {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    detail: "Internal server error".into(),
                });
            }
            let rows = self.rows.lock().unwrap();
            let limit = query
                .limit
                .unwrap_or(10)
                .min(self.max_limit.unwrap_or(u32::MAX));
            let matching: Vec<Msa> = rows
                .iter()
                .filter(|m| {
                    query
                        .search_term()
                        .is_none_or(|term| m.title.to_lowercase().contains(&term.to_lowercase()))
                })
                .cloned()
                .collect();
            Ok(ListResponse {
                total: matching.len() as u64,
                data: matching
                    .into_iter()
                    .skip(query.skip as usize)
                    .take(limit as usize)
                    .collect(),
                skip: query.skip,
                limit,
            })
        }

        async fn delete_msa(&self, id: i64) -> Result<(), ClientError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|m| m.id != id);
            if rows.len() == before {
                return Err(ClientError::Api {
                    status: StatusCode::NOT_FOUND,
                    detail: format!("An MSA with an id of {id} was not found."),
                });
            }
            Ok(())
        }
    }

    fn ids(view: &MsaListView<FakeApi>) -> Vec<i64> {
        view.items().iter().map(|m| m.id).collect()
    }

    #[tokio::test]
    async fn load_first_page() {
        let mut view = MsaListView::new(FakeApi::with_rows(5), 2);
        view.load().await;

        assert_eq!(ids(&view), [1, 2]);
        assert_eq!(view.total(), 5);
        assert_eq!(view.page_count(), 3);
        assert!(!view.is_loading());
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn paging_stays_in_bounds() {
        let mut view = MsaListView::new(FakeApi::with_rows(5), 2);
        view.load().await;

        assert!(!view.prev_page().await);
        assert!(view.next_page().await);
        assert!(view.next_page().await);
        assert_eq!(ids(&view), [5]);
        assert_eq!(view.page_number(), 3);
        assert!(!view.next_page().await);

        assert!(view.prev_page().await);
        assert_eq!(ids(&view), [3, 4]);
    }

    #[tokio::test]
    async fn delete_flow_sets_success_and_reloads() {
        let mut view = MsaListView::new(FakeApi::with_rows(3), 10);
        view.load().await;

        view.request_delete(2);
        assert_eq!(view.pending_delete(), Some(2));

        assert!(view.confirm_delete().await);
        assert_eq!(view.pending_delete(), None);
        assert_eq!(view.success(), Some("MSA 2 deleted successfully."));
        assert!(view.needs_reload());

        assert!(view.refresh().await);
        assert!(!view.needs_reload());
        assert_eq!(ids(&view), [1, 3]);
        assert!(!view.refresh().await);
    }

    #[tokio::test]
    async fn deleting_missing_row_reports_error_and_keeps_rows() {
        let mut view = MsaListView::new(FakeApi::with_rows(2), 10);
        view.load().await;

        view.request_delete(99);
        assert!(view.confirm_delete().await);

        assert_eq!(view.pending_delete(), None);
        assert!(view.success().is_none());
        assert!(!view.needs_reload());
        assert_eq!(
            view.error(),
            Some("Failed to delete MSA 99: An MSA with an id of 99 was not found.")
        );
        assert_eq!(view.api().rows.lock().unwrap().len(), 2);
        assert_eq!(ids(&view), [1, 2]);
    }

    #[tokio::test]
    async fn cancel_delete_calls_nothing() {
        let mut view = MsaListView::new(FakeApi::with_rows(2), 10);
        view.request_delete(1);
        view.cancel_delete();

        assert!(!view.confirm_delete().await);
        assert_eq!(view.api().rows.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_rows() {
        let mut view = MsaListView::new(FakeApi::with_rows(3), 10);
        view.load().await;
        *view.api().fail_list.lock().unwrap() = true;

        view.load().await;
        assert_eq!(ids(&view), [1, 2, 3]);
        assert_eq!(view.error(), Some("Internal server error"));
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn search_resets_to_first_page() {
        let mut view = MsaListView::new(FakeApi::with_rows(12), 5);
        view.load().await;
        view.next_page().await;
        assert_eq!(view.query().skip, 5);

        view.set_search("MSA 1").await;
        assert_eq!(view.query().skip, 0);
        assert_eq!(view.total(), 4);
        assert_eq!(ids(&view), [1, 10, 11, 12]);

        view.set_search("  ").await;
        assert_eq!(view.query().search, None);
        assert_eq!(view.total(), 12);
    }

    #[tokio::test]
    async fn sort_resets_to_first_page() {
        let mut view = MsaListView::new(FakeApi::with_rows(12), 5);
        view.load().await;
        view.next_page().await;

        view.set_sort("title:desc").await;
        assert_eq!(view.query().skip, 0);
        assert_eq!(view.query().sortby.as_deref(), Some("title:desc"));
    }

    #[tokio::test]
    async fn deleting_last_row_of_last_page_steps_back() {
        let mut view = MsaListView::new(FakeApi::with_rows(3), 2);
        view.load().await;
        view.next_page().await;
        assert_eq!(ids(&view), [3]);

        view.request_delete(3);
        view.confirm_delete().await;
        let calls = view.api().calls();
        view.refresh().await;

        assert_eq!(view.api().calls(), calls + 2);
        assert_eq!(view.query().skip, 0);
        assert_eq!(ids(&view), [1, 2]);
    }

    #[tokio::test]
    async fn pages_by_the_limit_the_server_applied() {
        let mut view = MsaListView::new(FakeApi::capped(7, 3), 5);
        view.load().await;
        assert_eq!(ids(&view), [1, 2, 3]);
        assert_eq!(view.query().limit, Some(3));
        assert_eq!(view.page_count(), 3);

        assert!(view.next_page().await);
        assert_eq!(ids(&view), [4, 5, 6]);
        assert!(view.next_page().await);
        assert_eq!(ids(&view), [7]);
        assert_eq!(view.page_number(), 3);
        assert!(!view.next_page().await);

        assert!(view.prev_page().await);
        assert_eq!(ids(&view), [4, 5, 6]);
    }

    #[tokio::test]
    async fn emptied_table_returns_to_first_page() {
        let mut view = MsaListView::new(FakeApi::with_rows(3), 2);
        view.load().await;
        view.next_page().await;
        assert_eq!(ids(&view), [3]);

        view.api().rows.lock().unwrap().retain(|m| m.id == 3);
        view.request_delete(3);
        assert!(view.confirm_delete().await);
        let calls = view.api().calls();
        view.refresh().await;

        assert_eq!(view.api().calls(), calls + 1);
        assert_eq!(view.total(), 0);
        assert!(view.items().is_empty());
        assert_eq!(view.query().skip, 0);
        assert_eq!(view.page_number(), 1);
        assert_eq!(view.page_count(), 1);
        assert!(!view.has_prev_page());
    }
}

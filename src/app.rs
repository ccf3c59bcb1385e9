//! Application state and update operations.
//!
//! The mutable state (record collection, loading flag, page state, row
//! cursor) lives here and changes only through named operations, so the
//! pagination invariants hold at every boundary. Async results arrive as
//! [`AppMessage`]s and are committed on the event-loop thread.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::{ApiError, SampleApiClient};
use crate::config::AppConfig;
use crate::domain::pagination::{total_pages, visible_page, PageState, PageView};
use crate::models::Record;

/// Messages delivered from async tasks to the event loop.
#[derive(Debug)]
pub enum AppMessage {
    /// The startup fetch resolved with the full record collection
    SamplesLoaded(Vec<Record>),
    /// The startup fetch failed; the collection stays as it was
    SamplesLoadFailed(ApiError),
}

/// Top-level application state.
pub struct App {
    /// Full record collection, replaced wholesale by a successful fetch
    records: Vec<Record>,
    /// True until the first fetch resolves successfully
    loading: bool,
    /// Pagination state, 1-based
    page: PageState,
    /// Cursor inside the visible page, 0-based
    selected_row: usize,
    /// API client shared with the fetch task
    client: Arc<SampleApiClient>,
    /// Sender half of the async message channel
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver half; the event loop takes ownership of it
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Set whenever state changed and the next frame must be drawn
    pub needs_redraw: bool,
}

impl App {
    /// Create the app from configuration, wired to the production
    /// transport.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(
            Arc::new(SampleApiClient::with_base_url(config.base_url.clone())),
            config.page_size,
        )
    }

    /// Create the app around an existing API client (tests inject a mock
    /// transport this way).
    pub fn with_client(client: Arc<SampleApiClient>, page_size: usize) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            records: Vec::new(),
            loading: true,
            page: PageState::new(page_size),
            selected_row: 0,
            client,
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Spawn the one startup fetch.
    ///
    /// Called exactly once at activation; page changes never refetch.
    /// The task resolves to a single [`AppMessage`].
    pub fn load_samples(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.fetch_samples().await {
                Ok(records) => AppMessage::SamplesLoaded(records),
                Err(e) => AppMessage::SamplesLoadFailed(e),
            };
            let _ = tx.send(msg);
        });
    }

    /// Commit an async result.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::SamplesLoaded(records) => {
                self.set_records(records);
                self.loading = false;
            }
            AppMessage::SamplesLoadFailed(e) => {
                // Absorbed: the table silently stays on its empty/stale
                // state, and the loading flag keeps its current value.
                tracing::error!("failed to load samples: {e}");
            }
        }
        self.mark_dirty();
    }

    /// Replace the collection wholesale.
    ///
    /// Replacement is a transition like any other: the current page is
    /// re-clamped so `1 <= current_page <= max(1, total_pages)` survives
    /// a shrink, and the row cursor is pulled back inside the page.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        let total = self.total_pages();
        self.page.clamp_to(total);
        self.clamp_selected_row();
    }

    /// The full record collection, in fetch order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// True until the first successful fetch.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The current pagination state.
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// 0-based cursor inside the visible page.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Derive the current page view. Pure; recomputed per frame.
    pub fn page_view(&self) -> PageView<'_, Record> {
        visible_page(&self.records, &self.page)
    }

    fn total_pages(&self) -> usize {
        total_pages(self.records.len(), self.page.page_size())
    }

    /// Go to the previous page. No-op on page 1.
    pub fn go_prev(&mut self) {
        if self.page.go_prev() {
            self.selected_row = 0;
            self.mark_dirty();
        }
    }

    /// Go to the next page. No-op on the last page (or with no pages).
    pub fn go_next(&mut self) {
        let total = self.total_pages();
        if self.page.go_next(total) {
            self.selected_row = 0;
            self.mark_dirty();
        }
    }

    /// Jump directly to page `n`, clamped into the valid range.
    pub fn go_to_page(&mut self, n: usize) {
        let total = self.total_pages();
        if self.page.go_to_page(n, total) {
            self.selected_row = 0;
            self.mark_dirty();
        }
    }

    /// Move the row cursor up within the visible page.
    pub fn select_prev_row(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
            self.mark_dirty();
        }
    }

    /// Move the row cursor down within the visible page.
    pub fn select_next_row(&mut self) {
        let rows = self.page_view().rows.len();
        if rows > 0 && self.selected_row < rows - 1 {
            self.selected_row += 1;
            self.mark_dirty();
        }
    }

    fn clamp_selected_row(&mut self) {
        let rows = self.page_view().rows.len();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));
    }

    /// The record under the row cursor, if any.
    pub fn selected_record(&self) -> Option<&Record> {
        let view = self.page_view();
        view.rows.get(self.selected_row)
    }

    /// Per-row "view" action. Not wired to a backend; extension point.
    pub fn view_selected(&self) {
        if let Some(record) = self.selected_record() {
            tracing::debug!(
                concentration = record.concentration,
                "view action not implemented"
            );
        }
    }

    /// Per-row "delete" action. Not wired to a backend; extension point.
    pub fn delete_selected(&self) {
        if let Some(record) = self.selected_record() {
            tracing::debug!(
                concentration = record.concentration,
                "delete action not implemented"
            );
        }
    }

    /// Ask the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}

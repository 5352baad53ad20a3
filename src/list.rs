//! List loading: paging, filtering, and refresh for one list view.
//!
//! A [`ListController`] owns the state of one paginated list: the items shown
//! so far, the current page, and whether more pages exist. It drives a
//! [`ListSource`] and decides whether a fetched page replaces or extends what
//! is shown.
//!
//! Each operation comes in two forms. The `begin_*` methods update state and
//! return a [`Fetch`] ticket describing the request; the host runs the request
//! however it likes and hands the result to [`ListController::finish`]. The
//! plain methods (`initial_load`, `load_more`, ...) do both steps against a
//! source directly.
//!
//! Every reset (initial load, refresh, filter change) starts a new generation.
//! A ticket from an older generation is discarded when it finishes, so a slow
//! response to a superseded query never overwrites newer results.
//!
//! A ticket dropped without being finished does not wedge the controller:
//! the next `load_more` sees the abandoned request and recovers, and
//! [`ListController::abandon`] does the same eagerly.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;

use crate::model::{Entry, ListQuery, Page};
use crate::publish::{Publisher, Subscription};
use crate::service::ListSource;

/// Where the list is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// A transient message for the user, carried by a single view emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoadFailed,
}

impl Notice {
    /// Translation key for display.
    pub fn label_key(self) -> &'static str {
        match self {
            Notice::LoadFailed => "list.load-failed",
        }
    }
}

/// What the host UI renders, emitted on every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub phase: Phase,
    pub has_more: bool,
    pub notice: Option<Notice>,
}

impl<T> ListView<T> {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Idle,
            has_more: false,
            notice: None,
        }
    }
}

/// How an acknowledged request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckOutcome {
    Loaded,
    Failed,

    /// The controller refused the request (already loading, or no more pages).
    Rejected,

    /// A newer query replaced this one before it finished.
    Superseded,

    /// The ticket was dropped without being finished.
    Dropped,
}

/// A one-shot completion signal for a host's loading indicator.
///
/// Fires exactly once: on [`Ack::complete`], or from `Drop` with
/// [`AckOutcome::Dropped`] if never completed.
pub struct Ack {
    signal: Option<Box<dyn FnOnce(AckOutcome)>>,
}

impl Ack {
    pub fn new(signal: impl FnOnce(AckOutcome) + 'static) -> Self {
        Self {
            signal: Some(Box::new(signal)),
        }
    }

    /// An acknowledgement nobody is waiting on.
    pub fn none() -> Self {
        Self { signal: None }
    }

    pub fn complete(mut self, outcome: AckOutcome) {
        if let Some(signal) = self.signal.take() {
            signal(outcome);
        }
    }
}

impl Drop for Ack {
    fn drop(&mut self) {
        if let Some(signal) = self.signal.take() {
            signal(AckOutcome::Dropped);
        }
    }
}

impl fmt::Debug for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ack")
            .field("pending", &self.signal.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    /// Replace the shown items.
    Reset,
    /// Append to the shown items.
    More,
}

/// Clears its flag when the ticket holding it goes away.
#[derive(Debug)]
struct Outstanding(Rc<Cell<bool>>);

impl Drop for Outstanding {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// An issued page request, to be handed back to [`ListController::finish`]
/// or [`ListController::abandon`].
#[derive(Debug)]
pub struct Fetch<F> {
    generation: u64,
    kind: FetchKind,
    page: usize,
    query: ListQuery<F>,
    ack: Ack,
    _outstanding: Outstanding,
}

impl<F> Fetch<F> {
    pub fn query(&self) -> &ListQuery<F> {
        &self.query
    }

    /// The 1-based page this request loads.
    pub fn page(&self) -> usize {
        self.page
    }
}

/// Paging and filtering state for one list view.
pub struct ListController<T: Entry> {
    /// Search and filters; offset and limit are computed per fetch.
    query: ListQuery<T::Filters>,
    items_per_page: usize,
    current_page: usize,
    total_pages: usize,
    items: Vec<T>,
    phase: Phase,
    has_more: bool,
    generation: u64,

    /// The latest issued ticket's kind and liveness flag.
    in_flight: Option<(FetchKind, Rc<Cell<bool>>)>,
    view: Publisher<ListView<T>>,
}

impl<T: Entry> ListController<T> {
    /// A controller with no search term and every filter disabled.
    /// A page size of zero is treated as one.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            query: ListQuery::window(0, items_per_page.max(1)),
            items_per_page: items_per_page.max(1),
            current_page: 0,
            total_pages: 0,
            items: Vec::new(),
            phase: Phase::Idle,
            has_more: false,
            generation: 0,
            in_flight: None,
            view: Publisher::default(),
        }
    }

    // ── Two-step operations ──

    /// Resets to page one and requests it.
    ///
    /// Shown items are cleared before the request resolves.
    pub fn begin_initial_load(&mut self) -> Fetch<T::Filters> {
        self.begin_reset(Ack::none())
    }

    /// Same as an initial load, but acknowledges `ack` when the page lands.
    pub fn begin_refresh(&mut self, ack: Ack) -> Fetch<T::Filters> {
        self.begin_reset(ack)
    }

    /// Changes the search or filters, then resets to page one.
    pub fn begin_apply_filter(
        &mut self,
        change: impl FnOnce(&mut ListQuery<T::Filters>),
    ) -> Fetch<T::Filters> {
        change(&mut self.query);
        self.begin_reset(Ack::none())
    }

    /// Requests the next page.
    ///
    /// Returns `None`, completing `ack` as [`AckOutcome::Rejected`], while a
    /// request is outstanding or when no pages remain.
    pub fn begin_load_more(&mut self, ack: Ack) -> Option<Fetch<T::Filters>> {
        self.recover_abandoned();
        if self.phase == Phase::Loading || !self.has_more {
            debug!(
                loading = self.phase == Phase::Loading,
                has_more = self.has_more,
                "load more rejected"
            );
            ack.complete(AckOutcome::Rejected);
            return None;
        }
        self.phase = Phase::Loading;
        self.emit(None);
        Some(self.fetch_for(FetchKind::More, self.current_page + 1, ack))
    }

    /// Applies a fetched page, or a failed fetch (`None`).
    ///
    /// Returns false, changing nothing, when the ticket belongs to a
    /// superseded generation. The ticket's acknowledgement fires either way.
    pub fn finish(&mut self, fetch: Fetch<T::Filters>, result: Option<Page<T>>) -> bool {
        if fetch.generation != self.generation {
            debug!(
                stale = fetch.generation,
                current = self.generation,
                "discarding superseded page"
            );
            fetch.ack.complete(AckOutcome::Superseded);
            return false;
        }
        self.in_flight = None;

        match result {
            Some(page) => {
                self.total_pages = page.total_count.div_ceil(self.items_per_page);
                match fetch.kind {
                    FetchKind::Reset => self.items = page.items,
                    FetchKind::More => self.items.extend(page.items),
                }
                self.current_page = fetch.page;
                self.has_more = self.current_page < self.total_pages;
                self.phase = Phase::Loaded;
                debug!(
                    page = self.current_page,
                    total_pages = self.total_pages,
                    shown = self.items.len(),
                    "page loaded"
                );
                self.emit(None);
                fetch.ack.complete(AckOutcome::Loaded);
            }
            None => {
                // A failed fetch stops paging just like an empty one.
                self.has_more = false;
                self.phase = Phase::Error;
                debug!(page = fetch.page, "page failed to load");
                self.emit(Some(Notice::LoadFailed));
                fetch.ack.complete(AckOutcome::Failed);
            }
        }
        true
    }

    /// Gives up on a ticket without a result.
    ///
    /// The acknowledgement fires as [`AckOutcome::Dropped`]. If the ticket is
    /// the one the controller is waiting on, loading ends: an abandoned reset
    /// returns to `Idle`, an abandoned page leaves the shown items `Loaded`.
    pub fn abandon(&mut self, fetch: Fetch<T::Filters>) {
        drop(fetch);
        self.recover_abandoned();
    }

    // ── One-step operations ──

    pub fn initial_load(&mut self, source: &impl ListSource<T>) {
        let fetch = self.begin_initial_load();
        self.run(source, fetch);
    }

    pub fn load_more(&mut self, source: &impl ListSource<T>, ack: Ack) {
        if let Some(fetch) = self.begin_load_more(ack) {
            self.run(source, fetch);
        }
    }

    pub fn refresh(&mut self, source: &impl ListSource<T>, ack: Ack) {
        let fetch = self.begin_refresh(ack);
        self.run(source, fetch);
    }

    pub fn apply_filter(
        &mut self,
        source: &impl ListSource<T>,
        change: impl FnOnce(&mut ListQuery<T::Filters>),
    ) {
        let fetch = self.begin_apply_filter(change);
        self.run(source, fetch);
    }

    // ── State ──

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The last page loaded, 1-based; zero before anything has loaded.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn query(&self) -> &ListQuery<T::Filters> {
        &self.query
    }

    /// The latest emitted view.
    pub fn view(&self) -> Arc<ListView<T>> {
        self.view.latest()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Arc<ListView<T>>) + 'static) -> Subscription {
        self.view.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, key: Subscription) -> bool {
        self.view.unsubscribe(key)
    }

    fn begin_reset(&mut self, ack: Ack) -> Fetch<T::Filters> {
        self.generation += 1;
        self.current_page = 1;
        self.total_pages = 0;
        self.items.clear();
        self.has_more = false;
        self.phase = Phase::Loading;
        self.emit(None);
        self.fetch_for(FetchKind::Reset, 1, ack)
    }

    /// Leaves `Loading` when the awaited ticket was dropped unfinished.
    fn recover_abandoned(&mut self) {
        let Some((kind, live)) = &self.in_flight else {
            return;
        };
        if live.get() || self.phase != Phase::Loading {
            return;
        }
        self.phase = match kind {
            FetchKind::Reset => Phase::Idle,
            FetchKind::More => Phase::Loaded,
        };
        self.in_flight = None;
        debug!(phase = ?self.phase, "recovered from an abandoned fetch");
        self.emit(None);
    }

    fn fetch_for(&mut self, kind: FetchKind, page: usize, ack: Ack) -> Fetch<T::Filters> {
        let query = ListQuery {
            search: self.query.search.clone(),
            filters: self.query.filters.clone(),
            offset: (page - 1) * self.items_per_page,
            limit: self.items_per_page,
        };
        let live = Rc::new(Cell::new(true));
        self.in_flight = Some((kind, Rc::clone(&live)));
        Fetch {
            generation: self.generation,
            kind,
            page,
            query,
            ack,
            _outstanding: Outstanding(live),
        }
    }

    fn run(&mut self, source: &impl ListSource<T>, fetch: Fetch<T::Filters>) {
        let result = source.fetch(fetch.query());
        self.finish(fetch, result);
    }

    fn emit(&mut self, notice: Option<Notice>) {
        self.view.publish(ListView {
            items: self.items.clone(),
            phase: self.phase,
            has_more: self.has_more,
            notice,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use crate::backend::seed;
    use crate::model::{Filter, Resource, ResourceKind};
    use crate::service::ResourceService;
    use crate::service::testing::FlakyBackend;

    type Outcomes = Rc<RefCell<Vec<AckOutcome>>>;

    fn tracked_ack() -> (Ack, Outcomes) {
        let outcomes: Outcomes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&outcomes);
        (Ack::new(move |o| sink.borrow_mut().push(o)), outcomes)
    }

    fn ids(controller: &ListController<Resource>) -> Vec<u64> {
        controller.items().iter().map(|r| r.id).collect()
    }

    #[test]
    fn pages_through_twenty_five_entries() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);

        list.initial_load(&service);
        assert_eq!(list.items().len(), 10);
        assert!(list.has_more());
        assert_eq!(list.total_pages(), 3);
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.phase(), Phase::Loaded);

        list.load_more(&service, Ack::none());
        list.load_more(&service, Ack::none());
        assert_eq!(list.items().len(), 25);
        assert!(!list.has_more());
        assert_eq!(list.current_page(), 3);

        let (ack, outcomes) = tracked_ack();
        list.load_more(&service, ack);
        assert_eq!(list.items().len(), 25);
        assert_eq!(list.current_page(), 3);
        assert_eq!(*outcomes.borrow(), vec![AckOutcome::Rejected]);
    }

    #[test]
    fn load_more_concatenates_without_gaps_or_duplicates() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(4);

        list.initial_load(&service);
        while list.has_more() {
            list.load_more(&service, Ack::none());
        }

        let shown = ids(&list);
        let expected: Vec<u64> = seed::resources().iter().map(|r| r.id).collect();
        assert_eq!(shown, expected);
        assert_eq!(shown.iter().collect::<HashSet<_>>().len(), shown.len());
        assert!(list.items().len() <= list.total_pages() * list.items_per_page());
    }

    #[test]
    fn refresh_is_idempotent() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);
        list.initial_load(&service);
        list.load_more(&service, Ack::none());

        list.refresh(&service, Ack::none());
        let first = ids(&list);
        list.refresh(&service, Ack::none());

        assert_eq!(ids(&list), first);
        assert_eq!(first.len(), 10);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn apply_filter_resets_before_fetch_resolves() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(5);
        list.initial_load(&service);
        list.load_more(&service, Ack::none());
        assert_eq!(list.current_page(), 2);

        let fetch = list.begin_apply_filter(|q| q.filters.kind = Filter::Only(ResourceKind::Video));
        assert_eq!(list.current_page(), 1);
        assert!(list.items().is_empty());
        assert!(list.view().is_loading());
        assert_eq!(fetch.page(), 1);
        assert_eq!(fetch.query().offset, 0);

        let result = service.fetch(fetch.query());
        assert!(list.finish(fetch, result));
        assert!(list.items().iter().all(|r| r.kind == ResourceKind::Video));
    }

    #[test]
    fn unmatched_search_is_empty_not_error() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);

        list.apply_filter(&service, |q| q.search = "xyz-not-present".into());

        assert!(list.items().is_empty());
        assert!(!list.has_more());
        assert_eq!(list.total_pages(), 0);
        assert_eq!(list.phase(), Phase::Loaded);
        assert_eq!(list.view().notice, None);
    }

    #[test]
    fn load_more_is_rejected_while_loading() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);
        list.initial_load(&service);

        let first = list.begin_load_more(Ack::none()).unwrap();
        let (ack, outcomes) = tracked_ack();
        assert!(list.begin_load_more(ack).is_none());
        assert_eq!(*outcomes.borrow(), vec![AckOutcome::Rejected]);

        let result = service.fetch(first.query());
        list.finish(first, result);
        assert_eq!(list.current_page(), 2);
        assert_eq!(list.items().len(), 20);
    }

    #[test]
    fn superseded_results_are_discarded() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);

        let stale = list.begin_initial_load();
        let fresh = list.begin_apply_filter(|q| q.search = "screen".into());

        let fresh_result = service.fetch(fresh.query());
        assert!(list.finish(fresh, fresh_result));
        let filtered = ids(&list);

        let (ack, outcomes) = tracked_ack();
        let stale = Fetch { ack, ..stale };
        let stale_result = service.fetch(stale.query());
        assert!(!list.finish(stale, stale_result));

        assert_eq!(ids(&list), filtered);
        assert_eq!(*outcomes.borrow(), vec![AckOutcome::Superseded]);
    }

    #[test]
    fn load_more_superseded_by_refresh() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);
        list.initial_load(&service);

        let (more_ack, more_outcomes) = tracked_ack();
        let more = list.begin_load_more(more_ack).unwrap();
        let (refresh_ack, refresh_outcomes) = tracked_ack();
        let refresh = list.begin_refresh(refresh_ack);

        let result = service.fetch(refresh.query());
        list.finish(refresh, result);
        let result = service.fetch(more.query());
        list.finish(more, result);

        assert_eq!(list.items().len(), 10);
        assert_eq!(list.current_page(), 1);
        assert_eq!(*refresh_outcomes.borrow(), vec![AckOutcome::Loaded]);
        assert_eq!(*more_outcomes.borrow(), vec![AckOutcome::Superseded]);
    }

    #[test]
    fn failed_refresh_acknowledges_once_and_notifies() {
        let service = ResourceService::new(FlakyBackend::down(seed::resources()));
        let mut list = ListController::new(10);
        let views = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&views);
        list.subscribe(move |v: &Arc<ListView<Resource>>| sink.borrow_mut().push(Arc::clone(v)));

        let (ack, outcomes) = tracked_ack();
        list.refresh(&service, ack);

        assert_eq!(*outcomes.borrow(), vec![AckOutcome::Failed]);
        assert_eq!(list.phase(), Phase::Error);
        assert!(!list.has_more());
        assert!(list.items().is_empty());
        let last = views.borrow().last().cloned().unwrap();
        assert_eq!(last.notice, Some(Notice::LoadFailed));
    }

    #[test]
    fn failure_mid_list_keeps_shown_items_and_stops_paging() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);
        list.initial_load(&service);

        let fetch = list.begin_load_more(Ack::none()).unwrap();
        assert!(list.finish(fetch, None));

        assert_eq!(list.items().len(), 10);
        assert!(!list.has_more());
        assert_eq!(list.phase(), Phase::Error);

        let (ack, outcomes) = tracked_ack();
        list.load_more(&service, ack);
        assert_eq!(*outcomes.borrow(), vec![AckOutcome::Rejected]);
    }

    #[test]
    fn dropped_ticket_still_acknowledges() {
        let mut list: ListController<Resource> = ListController::new(10);
        let (ack, outcomes) = tracked_ack();

        drop(list.begin_refresh(ack));

        assert_eq!(*outcomes.borrow(), vec![AckOutcome::Dropped]);
    }

    #[test]
    fn load_more_recovers_from_dropped_ticket() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);
        list.initial_load(&service);

        drop(list.begin_load_more(Ack::none()));
        assert_eq!(list.phase(), Phase::Loading);

        let (ack, outcomes) = tracked_ack();
        list.load_more(&service, ack);

        assert_eq!(*outcomes.borrow(), vec![AckOutcome::Loaded]);
        assert_eq!(list.items().len(), 20);
        assert_eq!(list.current_page(), 2);
        assert_eq!(list.phase(), Phase::Loaded);
    }

    #[test]
    fn abandon_ends_loading() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);
        list.initial_load(&service);

        let (ack, outcomes) = tracked_ack();
        let fetch = list.begin_load_more(ack).unwrap();
        assert_eq!(fetch.page(), 2);
        assert!(list.view().is_loading());

        list.abandon(fetch);

        assert_eq!(*outcomes.borrow(), vec![AckOutcome::Dropped]);
        assert_eq!(list.phase(), Phase::Loaded);
        assert!(!list.view().is_loading());
        assert_eq!(list.items().len(), 10);
        assert_eq!(list.current_page(), 1);
        assert!(list.has_more());
    }

    #[test]
    fn abandoned_reset_returns_to_idle() {
        let mut list: ListController<Resource> = ListController::new(10);

        let fetch = list.begin_initial_load();
        list.abandon(fetch);

        assert_eq!(list.phase(), Phase::Idle);
        assert!(list.items().is_empty());
    }

    #[test]
    fn abandoning_stale_ticket_keeps_current_load() {
        let mut list: ListController<Resource> = ListController::new(10);

        let stale = list.begin_initial_load();
        let current = list.begin_refresh(Ack::none());
        list.abandon(stale);

        assert_eq!(list.phase(), Phase::Loading);
        drop(current);
    }

    #[test]
    fn every_state_change_is_emitted() {
        let service = ResourceService::seeded();
        let mut list = ListController::new(10);
        let views = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&views);
        list.subscribe(move |v: &Arc<ListView<Resource>>| {
            sink.borrow_mut().push((v.phase, v.items.len(), v.has_more));
        });

        list.initial_load(&service);
        list.load_more(&service, Ack::none());

        assert_eq!(
            *views.borrow(),
            vec![
                (Phase::Idle, 0, false),
                (Phase::Loading, 0, false),
                (Phase::Loaded, 10, true),
                (Phase::Loading, 10, true),
                (Phase::Loaded, 20, true),
            ]
        );
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let list: ListController<Resource> = ListController::new(0);
        assert_eq!(list.items_per_page(), 1);
    }
}

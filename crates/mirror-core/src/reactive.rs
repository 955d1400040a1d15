//! Per-thread dependency graph.
//!
//! Signals report reads and writes here; observers (mounted components and
//! watchers) are re-run when a signal they read during their last run changes.
//! Edges are partitioned by signal, so a write only ever reaches the observers
//! of that one signal.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;

use slotmap::{SecondaryMap, SlotMap, new_key_type};
use smallvec::SmallVec;

pub type SignalId = u64;

new_key_type! {
    /// A mounted component or watcher registered with the graph.
    pub struct ObserverId;
}

/// Observer runs allowed in one flush before it is treated as an update loop.
pub const MAX_RUNS_PER_FLUSH: usize = 10_000;

thread_local! {
    static CURRENT_OBSERVER: Cell<Option<ObserverId>> = const { Cell::new(None) };
    static GRAPH: RefCell<DepGraph> = RefCell::new(DepGraph::default());
    static NEXT_SIGNAL: Cell<SignalId> = const { Cell::new(1) };
}

struct Observer {
    name: &'static str,
    run: Rc<dyn Fn()>,
}

#[derive(Default)]
struct DepGraph {
    // signal_id -> observers that depend on it
    edges: HashMap<SignalId, BTreeSet<ObserverId>>,
    // observer_id -> signals it depends on
    back: SecondaryMap<ObserverId, HashSet<SignalId>>,
    observers: SlotMap<ObserverId, Observer>,
    queue: VecDeque<ObserverId>,
    queued: HashSet<ObserverId>,
    batch_depth: usize,
    flushing: bool,
}

impl DepGraph {
    fn remove_all_edges_for(&mut self, obs: ObserverId) {
        if let Some(signals) = self.back.remove(obs) {
            for s in signals {
                if let Some(set) = self.edges.get_mut(&s) {
                    set.remove(&obs);
                    if set.is_empty() {
                        self.edges.remove(&s);
                    }
                }
            }
        }
    }

    fn remove_observer(&mut self, obs: ObserverId) -> Option<Observer> {
        let removed = self.observers.remove(obs);
        self.remove_all_edges_for(obs);
        if self.queued.remove(&obs) {
            self.queue.retain(|o| *o != obs);
        }
        removed
    }

    fn enqueue(&mut self, obs: ObserverId) {
        if self.observers.contains_key(obs) && self.queued.insert(obs) {
            self.queue.push_back(obs);
        }
    }

    fn should_flush(&self) -> bool {
        self.batch_depth == 0 && !self.flushing && !self.queue.is_empty()
    }
}

pub fn next_signal_id() -> SignalId {
    NEXT_SIGNAL.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    })
}

/// The observer whose run is currently being tracked, if any.
pub fn current_observer() -> Option<ObserverId> {
    CURRENT_OBSERVER.with(Cell::get)
}

pub fn register_signal_read(sig: SignalId) {
    let Some(obs) = current_observer() else {
        return;
    };
    GRAPH.with(|g| {
        let mut g = g.borrow_mut();
        if !g.observers.contains_key(obs) {
            return;
        }
        g.edges.entry(sig).or_default().insert(obs);
        if let Some(entry) = g.back.entry(obs) {
            entry.or_default().insert(sig);
        }
    });
}

/// Queue every observer of `sig`. Runs the queue right away unless a batch or
/// a flush is already in progress, in which case the outer one delivers it.
pub fn signal_changed(sig: SignalId) {
    let flush_now = GRAPH.with(|g| {
        let mut g = g.borrow_mut();
        let targets: SmallVec<[ObserverId; 8]> = g
            .edges
            .get(&sig)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        for obs in targets {
            g.enqueue(obs);
        }
        g.should_flush()
    });
    if flush_now {
        flush();
    }
}

/// Defer notifications until `f` returns. Nested batches flush once, when the
/// outermost one ends, so observers see every write made inside it.
pub fn batch<R>(f: impl FnOnce() -> R) -> R {
    struct BatchGuard;
    impl Drop for BatchGuard {
        fn drop(&mut self) {
            let _ = GRAPH.try_with(|g| g.borrow_mut().batch_depth -= 1);
        }
    }

    GRAPH.with(|g| g.borrow_mut().batch_depth += 1);
    let result = {
        let _guard = BatchGuard;
        f()
    };
    if GRAPH.with(|g| g.borrow().should_flush()) {
        flush();
    }
    result
}

fn flush() {
    struct FlushGuard;
    impl Drop for FlushGuard {
        fn drop(&mut self) {
            let _ = GRAPH.try_with(|g| g.borrow_mut().flushing = false);
        }
    }

    GRAPH.with(|g| g.borrow_mut().flushing = true);
    let _guard = FlushGuard;

    let mut runs = 0usize;
    loop {
        let next = GRAPH.with(|g| {
            let mut g = g.borrow_mut();
            while let Some(obs) = g.queue.pop_front() {
                g.queued.remove(&obs);
                if let Some(o) = g.observers.get(obs) {
                    return Some((obs, o.name, o.run.clone()));
                }
            }
            None
        });
        let Some((obs, name, run)) = next else {
            break;
        };

        // Past the budget every observer keeps the edges of its last run, so
        // it still hears about later changes.
        runs += 1;
        if runs > MAX_RUNS_PER_FLUSH {
            log::warn!(
                "reactive flush exceeded {MAX_RUNS_PER_FLUSH} observer runs (last: {name}); \
                 dropping pending updates. Is an observer writing a value it reads?"
            );
            GRAPH.with(|g| {
                let mut g = g.borrow_mut();
                g.queue.clear();
                g.queued.clear();
            });
            break;
        }

        // clear previous deps before recompute
        GRAPH.with(|g| g.borrow_mut().remove_all_edges_for(obs));
        log::trace!("re-running observer {name}");
        run_tracked(obs, &*run);
    }
}

fn run_tracked(obs: ObserverId, run: &dyn Fn()) {
    struct Restore(Option<ObserverId>);
    impl Drop for Restore {
        fn drop(&mut self) {
            let prev = self.0;
            let _ = CURRENT_OBSERVER.try_with(|c| c.set(prev));
        }
    }

    let _restore = Restore(CURRENT_OBSERVER.with(|c| c.replace(Some(obs))));
    run();
}

/// Run `f` without recording any signal reads against the current observer.
pub fn untracked<R>(f: impl FnOnce() -> R) -> R {
    struct Restore(Option<ObserverId>);
    impl Drop for Restore {
        fn drop(&mut self) {
            let prev = self.0;
            let _ = CURRENT_OBSERVER.try_with(|c| c.set(prev));
        }
    }

    let _restore = Restore(CURRENT_OBSERVER.with(|c| c.replace(None)));
    f()
}

pub fn new_observer(name: &'static str, f: impl Fn() + 'static) -> ObserverId {
    GRAPH.with(|g| {
        g.borrow_mut().observers.insert(Observer {
            name,
            run: Rc::new(f),
        })
    })
}

/// Remove an observer and all of its dependency edges.
pub fn remove_observer(id: ObserverId) {
    // The closure may own scopes whose teardown re-enters the graph, so it is
    // dropped only after the borrow is released.
    let removed = GRAPH
        .try_with(|g| g.borrow_mut().remove_observer(id))
        .ok()
        .flatten();
    drop(removed);
}

/// Run an observer immediately under tracking. Writes it makes are batched
/// and delivered after it returns.
pub fn run_observer_now(id: ObserverId) {
    let run = GRAPH.with(|g| {
        let mut g = g.borrow_mut();
        let run = g.observers.get(id).map(|o| o.run.clone());
        if run.is_some() {
            g.remove_all_edges_for(id);
        }
        run
    });
    if let Some(run) = run {
        batch(|| run_tracked(id, &*run));
    }
}

pub fn is_alive(id: ObserverId) -> bool {
    GRAPH.with(|g| g.borrow().observers.contains_key(id))
}

pub fn observer_count() -> usize {
    GRAPH.with(|g| g.borrow().observers.len())
}

/// Number of live observers that read `sig` during their last run.
pub fn subscriber_count(sig: SignalId) -> usize {
    GRAPH.with(|g| g.borrow().edges.get(&sig).map_or(0, BTreeSet::len))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::reactive::{self, MAX_RUNS_PER_FLUSH};
    use crate::*;

    mirror_store! {
        struct TestStore keyed by TestKey;

        slice state: TestState {
            Flag("flag") => flag: bool = shallow,
            Count("count") => count: i32 = shallow,
            Label("label") => label: Rc<String> = identity,
        }
        slice utils: TestUtils {
            Bump("bump") => bump: Action = identity,
        }
    }

    impl Default for TestState {
        fn default() -> Self {
            Self {
                flag: false,
                count: 7,
                label: Rc::new("default".to_string()),
            }
        }
    }

    impl Default for TestUtils {
        fn default() -> Self {
            Self {
                bump: Action::noop(),
            }
        }
    }

    fn registry() -> MirrorRegistry<TestStore> {
        MirrorRegistry::new(TestStore::default())
    }

    fn mount_reader<T: Clone + 'static>(
        mirror: &Mirror<TestStore>,
        slot: fn(&TestStore) -> &Slot<T>,
    ) -> (Mounted, Rc<RefCell<Vec<T>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mounted = mount("reader", {
            let mirror = mirror.clone();
            let seen = seen.clone();
            move || seen.borrow_mut().push(mirror.subscribe(slot))
        });
        (mounted, seen)
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        assert!(sig.set(100));
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_equal_write_is_silent() {
        let sig = signal(1);
        let view = mount("view", {
            let sig = sig.clone();
            move || {
                sig.get();
            }
        });
        assert!(!sig.set(1));
        assert_eq!(view.renders(), 1);
        assert!(sig.set(2));
        assert_eq!(view.renders(), 2);
    }

    #[test]
    fn test_defaults_visible_before_registration() {
        let reg = registry();
        let mirror = reg.mirror();

        assert_eq!(mirror.subscribe(|s| &s.flag), false);
        assert_eq!(mirror.subscribe(|s| &s.count), 7);
        assert_eq!(*mirror.subscribe(|s| &s.label), "default");
        assert!(TestKey::ALL.iter().all(|k| mirror.slot_state(*k) == SlotState::Unset));
    }

    #[test]
    fn test_subscriber_mounted_before_first_registration_updates() {
        let reg = registry();
        let (view, seen) = mount_reader(&reg.mirror(), |s| &s.count);
        assert_eq!(*seen.borrow(), vec![7]);

        reg.register(|s| &s.count, 8);
        assert_eq!(*seen.borrow(), vec![7, 8]);
        assert_eq!(view.renders(), 2);
    }

    #[test]
    fn test_isolation_between_keys() {
        let reg = registry();
        let (flag_view, _) = mount_reader(&reg.mirror(), |s| &s.flag);

        assert!(reg.register(|s| &s.count, 99));
        assert!(reg.register(|s| &s.label, Rc::new(String::from("other"))));
        assert_eq!(flag_view.renders(), 1);

        reg.register(|s| &s.flag, true);
        assert_eq!(flag_view.renders(), 2);
    }

    #[test]
    fn test_registration_is_idempotent() {
        let reg = registry();
        let (view, _) = mount_reader(&reg.mirror(), |s| &s.count);

        // equal to the default: marks the slot set, notifies nobody
        assert!(!reg.register(|s| &s.count, 7));
        assert_eq!(reg.slot_state(TestKey::Count), SlotState::Set);
        assert_eq!(view.renders(), 1);

        assert!(reg.register(|s| &s.count, 3));
        assert!(!reg.register(|s| &s.count, 3));
        assert_eq!(view.renders(), 2);
    }

    #[test]
    fn test_last_write_wins() {
        let reg = registry();
        reg.register(|s| &s.count, 1);
        reg.register(|s| &s.count, 2);
        assert_eq!(reg.mirror().subscribe(|s| &s.count), 2);
        assert_eq!(reg.peek(|s| &s.count), 2);
    }

    #[test]
    fn test_identity_slots_ignore_equal_contents() {
        let reg = registry();
        let (view, _) = mount_reader(&reg.mirror(), |s| &s.label);

        let same = reg.peek(|s| &s.label);
        assert!(!reg.register(|s| &s.label, same));
        assert_eq!(view.renders(), 1);

        // same text, new allocation: replaced wholesale
        assert!(reg.register(|s| &s.label, Rc::new(String::from("default"))));
        assert_eq!(view.renders(), 2);
    }

    #[test]
    fn test_actions_compare_by_identity() {
        let reg = registry();
        let (view, _) = mount_reader(&reg.mirror(), |s| &s.bump);

        let bump = Action::new(|()| {});
        assert!(reg.register(|s| &s.bump, bump.clone()));
        assert!(!reg.register(|s| &s.bump, bump));
        assert_eq!(view.renders(), 2);
    }

    #[test]
    fn test_unmount_stops_notifications() {
        let reg = registry();
        let (view, seen) = mount_reader(&reg.mirror(), |s| &s.flag);
        assert_eq!(reg.snapshot()[0].subscribers, 1);

        view.unmount();
        assert!(!view.is_mounted());
        reg.register(|s| &s.flag, true);

        assert_eq!(*seen.borrow(), vec![false]);
        assert_eq!(reg.snapshot()[0].subscribers, 0);
        view.unmount();
    }

    #[test]
    fn test_scope_dispose_unmounts_children() {
        let reg = registry();
        let scope = Scope::new();
        let (view, _) = scope.run(|| mount_reader(&reg.mirror(), |s| &s.count));
        let observers = reactive::observer_count();

        scope.dispose();
        assert!(!view.is_mounted());
        assert_eq!(reactive::observer_count(), observers - 1);

        reg.register(|s| &s.count, 0);
        assert_eq!(view.renders(), 1);
    }

    #[test]
    fn test_batch_delivers_consistent_snapshot() {
        let reg = registry();
        let mirror = reg.mirror();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let view = mount("pair", {
            let seen = seen.clone();
            move || {
                let pair = (mirror.subscribe(|s| &s.flag), mirror.subscribe(|s| &s.count));
                seen.borrow_mut().push(pair);
            }
        });

        batch(|| {
            reg.register(|s| &s.flag, true);
            reg.register(|s| &s.count, 42);
        });

        assert_eq!(*seen.borrow(), vec![(false, 7), (true, 42)]);
        assert_eq!(view.renders(), 2);

        reg.batch(|r| {
            r.register(|s| &s.flag, false);
            r.register(|s| &s.count, 0);
        });
        assert_eq!(seen.borrow().last(), Some(&(false, 0)));
        assert_eq!(view.renders(), 3);
    }

    #[test]
    fn test_writes_during_render_are_delivered_after_it() {
        let reg = registry();
        let (reader, seen) = mount_reader(&reg.mirror(), |s| &s.count);

        let writer_reg = reg.clone();
        let source = signal(1);
        let writer = mount("writer", {
            let source = source.clone();
            move || {
                let n = source.get();
                writer_reg.register(|s| &s.flag, n % 2 == 0);
                writer_reg.register(|s| &s.count, n * 10);
            }
        });

        source.set(2);
        assert_eq!(writer.renders(), 2);
        assert_eq!(*seen.borrow(), vec![7, 10, 20]);
        assert_eq!(reader.renders(), 3);
        assert!(reg.peek(|s| &s.flag));
    }

    #[test]
    fn test_dependencies_are_retracked_each_render() {
        let reg = registry();
        let mirror = reg.mirror();
        let view = mount("conditional", move || {
            if mirror.subscribe(|s| &s.flag) {
                mirror.subscribe(|s| &s.count);
            }
        });

        reg.register(|s| &s.count, 1);
        assert_eq!(view.renders(), 1);

        reg.register(|s| &s.flag, true);
        reg.register(|s| &s.count, 2);
        assert_eq!(view.renders(), 3);

        reg.register(|s| &s.flag, false);
        reg.register(|s| &s.count, 3);
        assert_eq!(view.renders(), 4);
    }

    #[test]
    fn test_watch_delivers_changes_until_disposed() {
        let reg = registry();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let guard = reg.mirror().watch(|s| &s.count, {
            let seen = seen.clone();
            move |v| seen.borrow_mut().push(*v)
        });

        reg.register(|s| &s.count, 1);
        reg.register(|s| &s.count, 1);
        reg.register(|s| &s.count, 2);
        guard.run();
        reg.register(|s| &s.count, 3);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_watcher_may_rewrite_its_own_key() {
        let reg = registry();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let guard = reg.mirror().watch(|s| &s.count, {
            let (writer, seen) = (reg.clone(), seen.clone());
            move |v| {
                seen.borrow_mut().push(*v);
                if *v > 100 {
                    writer.register(|s| &s.count, 100);
                }
            }
        });

        reg.register(|s| &s.count, 150);

        assert_eq!(reg.peek(|s| &s.count), 100);
        assert_eq!(*seen.borrow(), vec![150, 100]);
        guard.run();
    }

    #[test]
    fn test_dynamic_keys_fail_fast() {
        let reg = registry();

        assert_eq!(
            reg.register_dyn("nope", Box::new(1)),
            Err(MirrorError::UnknownKey("nope".into()))
        );
        assert!(matches!(
            reg.register_dyn("count", Box::new("five")),
            Err(MirrorError::TypeMismatch { key: "count", .. })
        ));
        assert_eq!(reg.register_dyn("count", Box::new(5i32)), Ok(true));
        assert_eq!(reg.peek(|s| &s.count), 5);

        assert_eq!("label".parse::<TestKey>(), Ok(TestKey::Label));
        assert_eq!(TestKey::Bump.to_string(), "bump");
    }

    #[test]
    fn test_snapshot_lists_every_key_in_order() {
        let reg = registry();
        reg.register(|s| &s.flag, true);
        let snap = reg.snapshot();

        let keys: Vec<_> = snap.iter().map(|i| i.key).collect();
        assert_eq!(keys, vec!["flag", "count", "label", "bump"]);
        assert_eq!(snap[0].state, SlotState::Set);
        assert_eq!(snap[1].state, SlotState::Unset);
        assert_eq!(snap[2].compare, Compare::Identity);
    }

    #[test]
    fn test_weak_registry_does_not_keep_store_alive() {
        let reg = registry();
        let weak = reg.downgrade();
        assert!(weak.upgrade().is_some());
        drop(reg);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_runaway_update_loop_is_cut_off() {
        let counter = signal(0u32);
        let view = mount("runaway", {
            let counter = counter.clone();
            move || {
                let n = counter.get();
                counter.set(n + 1);
            }
        });

        assert!(view.renders() <= MAX_RUNS_PER_FLUSH + 1);
        assert!(counter.get_untracked() > 1);

        // the graph is usable afterwards
        let calls = Rc::new(Cell::new(0));
        let other = signal(0);
        let _watch = other.watch({
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });
        view.unmount();
        other.set(1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_cutoff_keeps_bystander_subscribed() {
        let loopy = signal(0u32);
        let other = signal(0u32);
        let hits = Rc::new(Cell::new(0));
        let bystander = mount("bystander", {
            let (loopy, other, hits) = (loopy.clone(), other.clone(), hits.clone());
            move || {
                loopy.get();
                other.get();
                hits.set(hits.get() + 1);
            }
        });
        let runaway = mount("runaway", {
            let loopy = loopy.clone();
            move || {
                let n = loopy.get();
                loopy.set(n + 1);
            }
        });
        assert!(runaway.renders() > 1);

        let before = hits.get();
        assert_eq!(other.subscriber_count(), 1);
        other.set(1);
        assert!(bystander.is_mounted());
        assert_eq!(hits.get(), before + 1);

        runaway.unmount();
        bystander.unmount();
        assert_eq!(loopy.subscriber_count(), 0);
    }
}

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[derive(Default)]
struct Counts {
    added: Cell<usize>,
    removed: Cell<usize>,
}

struct FakeTarget {
    counts: Rc<Counts>,
    fail: bool,
}

impl ListenerTarget for FakeTarget {
    type Handle = usize;

    fn listen(&self) -> Option<usize> {
        if self.fail {
            return None;
        }
        let next = self.counts.added.get() + 1;
        self.counts.added.set(next);
        Some(next)
    }

    fn unlisten(&self, _handle: usize) {
        self.counts.removed.set(self.counts.removed.get() + 1);
    }
}

fn scope() -> (ScopedListener<FakeTarget, (bool, bool)>, Rc<Counts>) {
    let counts = Rc::new(Counts::default());
    let target = FakeTarget { counts: Rc::clone(&counts), fail: false };
    (ScopedListener::new(target), counts)
}

#[test]
fn mount_and_unmount_adds_and_removes_exactly_once() {
    let (mut listener, counts) = scope();
    assert!(listener.sync((true, true)));
    assert!(listener.is_listening());
    drop(listener);
    assert_eq!(counts.added.get(), 1);
    assert_eq!(counts.removed.get(), 1);
}

#[test]
fn unchanged_deps_do_not_reregister() {
    let (mut listener, counts) = scope();
    listener.sync((true, false));
    assert!(!listener.sync((true, false)));
    assert!(!listener.sync((true, false)));
    assert_eq!(counts.added.get(), 1);
    assert_eq!(counts.removed.get(), 0);
}

#[test]
fn each_dependency_change_reregisters_once() {
    let (mut listener, counts) = scope();
    listener.sync((true, true));
    listener.sync((false, true));
    listener.sync((false, false));
    assert_eq!(counts.added.get(), 3);
    assert_eq!(counts.removed.get(), 2);
    drop(listener);
    assert_eq!(counts.removed.get(), 3);
}

#[test]
fn clear_removes_listener_and_forgets_deps() {
    let (mut listener, counts) = scope();
    listener.sync((true, true));
    listener.clear();
    assert!(!listener.is_listening());
    assert_eq!(counts.removed.get(), 1);

    assert!(listener.sync((true, true)));
    assert_eq!(counts.added.get(), 2);
}

#[test]
fn drop_after_clear_does_not_remove_twice() {
    let (mut listener, counts) = scope();
    listener.sync((false, false));
    listener.clear();
    drop(listener);
    assert_eq!(counts.removed.get(), 1);
}

#[test]
fn failed_registration_is_not_removed() {
    let counts = Rc::new(Counts::default());
    let target = FakeTarget { counts: Rc::clone(&counts), fail: true };
    let mut listener: ScopedListener<FakeTarget, u8> = ScopedListener::new(target);
    assert!(listener.sync(1));
    assert!(!listener.is_listening());
    drop(listener);
    assert_eq!(counts.removed.get(), 0);
}

fn group(targets: usize) -> (ListenerGroup<FakeTarget, (bool, bool)>, Rc<Counts>) {
    let counts = Rc::new(Counts::default());
    let targets = (0..targets).map(|_| FakeTarget { counts: Rc::clone(&counts), fail: false });
    (ListenerGroup::new(targets.collect::<Vec<_>>()), counts)
}

#[test]
fn pointer_listeners_follow_sidebar_lifecycle() {
    // mousemove + touchmove, driven by (active, pinned)
    let (mut listeners, counts) = group(2);

    assert_eq!(listeners.apply(Some((true, true))), 2);
    assert_eq!(listeners.listening(), 2);

    // unpin: each listener removed once, re-added once
    assert_eq!(listeners.apply(Some((true, false))), 2);
    assert_eq!((counts.added.get(), counts.removed.get()), (4, 2));

    // pointer leaves, sidebar hides
    assert_eq!(listeners.apply(Some((false, false))), 2);
    // more moves with the same state change nothing
    assert_eq!(listeners.apply(Some((false, false))), 0);
    assert_eq!((counts.added.get(), counts.removed.get()), (6, 4));

    // unmount
    listeners.clear();
    assert_eq!(listeners.listening(), 0);
    drop(listeners);
    assert_eq!((counts.added.get(), counts.removed.get()), (6, 6));
}

#[test]
fn group_without_deps_releases_everything() {
    let counts = Rc::new(Counts::default());
    let targets = (0..4).map(|_| FakeTarget { counts: Rc::clone(&counts), fail: false }).collect::<Vec<_>>();
    let mut listeners: ListenerGroup<FakeTarget, ()> = ListenerGroup::new(targets);

    assert_eq!(listeners.apply(Some(())), 4);
    assert_eq!(listeners.apply(Some(())), 0);
    assert_eq!(listeners.apply(None), 0);
    assert_eq!(listeners.listening(), 0);
    assert_eq!((counts.added.get(), counts.removed.get()), (4, 4));

    assert_eq!(listeners.apply(Some(())), 4);
}

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[derive(Default)]
struct Counters {
    attached: Cell<u32>,
    detached: Cell<u32>,
}

impl Counters {
    fn live(&self) -> u32 {
        self.attached.get() - self.detached.get()
    }
}

struct FakeListener(Rc<Counters>);

impl Detach for FakeListener {
    fn detach(&mut self) {
        self.0.detached.set(self.0.detached.get() + 1);
    }
}

fn attach(counters: &Rc<Counters>) -> impl FnOnce() -> Option<FakeListener> + '_ {
    move || {
        counters.attached.set(counters.attached.get() + 1);
        Some(FakeListener(Rc::clone(counters)))
    }
}

#[test]
fn new_slot_holds_nothing() {
    let slot = ListenerSlot::<FakeListener>::new();
    assert!(!slot.is_attached());
}

#[test]
fn acquire_installs_one_listener() {
    let counters = Rc::new(Counters::default());
    let mut slot = ListenerSlot::new();
    assert!(slot.acquire_with(attach(&counters)));
    assert!(slot.is_attached());
    assert_eq!(counters.live(), 1);
}

#[test]
fn second_acquire_is_ignored_while_attached() {
    let counters = Rc::new(Counters::default());
    let mut slot = ListenerSlot::new();
    slot.acquire_with(attach(&counters));
    assert!(!slot.acquire_with(attach(&counters)));
    assert_eq!(counters.attached.get(), 1);
    assert_eq!(counters.live(), 1);
}

#[test]
fn release_detaches_and_is_idempotent() {
    let counters = Rc::new(Counters::default());
    let mut slot = ListenerSlot::new();
    slot.acquire_with(attach(&counters));
    slot.release();
    slot.release();
    assert!(!slot.is_attached());
    assert_eq!(counters.detached.get(), 1);
    assert_eq!(counters.live(), 0);
}

#[test]
fn release_without_listener_is_noop() {
    let mut slot = ListenerSlot::<FakeListener>::new();
    slot.release();
    assert!(!slot.is_attached());
}

#[test]
fn drop_releases_listener_held_while_open() {
    let counters = Rc::new(Counters::default());
    {
        let mut slot = ListenerSlot::new();
        slot.acquire_with(attach(&counters));
    }
    assert_eq!(counters.detached.get(), 1);
    assert_eq!(counters.live(), 0);
}

#[test]
fn drop_after_release_does_not_detach_twice() {
    let counters = Rc::new(Counters::default());
    {
        let mut slot = ListenerSlot::new();
        slot.acquire_with(attach(&counters));
        slot.release();
    }
    assert_eq!(counters.detached.get(), 1);
}

#[test]
fn refused_attach_leaves_slot_empty() {
    let mut slot = ListenerSlot::<FakeListener>::new();
    assert!(!slot.acquire_with(|| None));
    assert!(!slot.is_attached());
}

#[test]
fn open_close_cycles_never_stack_listeners() {
    let counters = Rc::new(Counters::default());
    let mut slot = ListenerSlot::new();
    for _ in 0..5 {
        slot.acquire_with(attach(&counters));
        assert_eq!(counters.live(), 1);
        slot.release();
        assert_eq!(counters.live(), 0);
    }
    assert_eq!(counters.attached.get(), 5);
    assert_eq!(counters.detached.get(), 5);
}

#[test]
fn sync_follows_open_flag_and_drop_releases_while_open() {
    let counters = Rc::new(Counters::default());
    let mut slot = ListenerSlot::new();

    slot.sync(true, attach(&counters));
    assert_eq!((counters.attached.get(), counters.live()), (1, 1));

    // a re-run while still open must not stack a second listener
    slot.sync(true, attach(&counters));
    assert_eq!((counters.attached.get(), counters.live()), (1, 1));

    slot.sync(false, attach(&counters));
    assert_eq!((counters.detached.get(), counters.live()), (1, 0));

    slot.sync(false, attach(&counters));
    assert_eq!(counters.detached.get(), 1);

    slot.sync(true, attach(&counters));
    assert_eq!((counters.attached.get(), counters.live()), (2, 1));

    drop(slot);
    assert_eq!((counters.detached.get(), counters.live()), (2, 0));
}

#[test]
fn cleanup_release_then_drop_detaches_once() {
    let counters = Rc::new(Counters::default());
    let mut slot = ListenerSlot::new();
    slot.sync(true, attach(&counters));
    slot.release();
    drop(slot);
    assert_eq!(counters.detached.get(), 1);
}

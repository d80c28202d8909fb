use evented::{EventEmitter, Listener};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

fn note(log: &Log, entry: &str) -> Listener<()> {
    let log = log.clone();
    let entry = entry.to_string();
    Listener::new(move |_, _| {
        log.borrow_mut().push(entry.clone());
        Ok(())
    })
}

#[test]
fn once_registered_by_nested_emit_fires_on_next_pass() -> anyhow::Result<()> {
    let log: Log = Rc::default();
    let emitter = EventEmitter::<()>::new();
    let done = note(&log, "done");

    // "b" 的一次性监听器在 "a" 的本轮触发中为 "a" 注册 done
    let on_b = {
        let log = log.clone();
        Listener::new(move |this: &EventEmitter<()>, _| {
            log.borrow_mut().push("b".into());
            this.once("a", done.clone());
            Ok(())
        })
    };
    let on_a = {
        let log = log.clone();
        Listener::new(move |this: &EventEmitter<()>, _| {
            log.borrow_mut().push("a".into());
            this.emit("b", &())?;
            Ok(())
        })
    };

    emitter.once("b", on_b).on("a", on_a);

    emitter.emit("a", &())?;
    assert_eq!(*log.borrow(), ["a", "b"]);
    assert_eq!(emitter.listener_count("a"), 2);

    emitter.emit("a", &())?;
    assert_eq!(*log.borrow(), ["a", "b", "a", "done"]);
    assert_eq!(emitter.listener_count("a"), 1);

    Ok(())
}

#[test]
fn nested_emits_keep_their_own_snapshots() -> anyhow::Result<()> {
    let log: Log = Rc::default();
    let emitter = EventEmitter::<u32>::new();

    let counter = {
        let log = log.clone();
        Listener::new(move |this: &EventEmitter<u32>, depth: &u32| {
            log.borrow_mut().push(format!("enter {depth}"));
            if *depth < 2 {
                this.on("depth", Listener::new(|_, _| Ok(())));
                this.emit("depth", &(depth + 1))?;
            }
            log.borrow_mut().push(format!("leave {depth}"));
            Ok(())
        })
    };

    emitter.on("depth", counter);
    emitter.emit("depth", &0)?;

    assert_eq!(
        *log.borrow(),
        ["enter 0", "enter 1", "enter 2", "leave 2", "leave 1", "leave 0"]
    );
    assert_eq!(emitter.listener_count("depth"), 3);
    Ok(())
}

#[test]
fn removing_a_pending_listener_affects_only_later_passes() -> anyhow::Result<()> {
    let log: Log = Rc::default();
    let emitter = EventEmitter::<()>::new();
    let later = note(&log, "later");

    let remover = {
        let later = later.clone();
        Listener::new(move |this: &EventEmitter<()>, _| {
            this.remove_all_listeners("other").off("a", &later);
            Ok(())
        })
    };

    emitter
        .on("a", remover)
        .once("a", later.clone())
        .on("other", note(&log, "other"));

    emitter.emit("a", &())?;
    assert_eq!(*log.borrow(), ["later"]);
    assert!(!emitter.has_listeners("other"));

    emitter.emit("a", &())?;
    assert_eq!(*log.borrow(), ["later"]);
    Ok(())
}

#[test]
fn listener_clearing_the_registry_does_not_stop_current_pass() -> anyhow::Result<()> {
    let log: Log = Rc::default();
    let emitter = EventEmitter::<()>::new();

    emitter
        .on(
            "a",
            Listener::new(|this: &EventEmitter<()>, _| {
                this.clear();
                Ok(())
            }),
        )
        .on("a", note(&log, "still runs"));

    emitter.emit("a", &())?;
    assert_eq!(*log.borrow(), ["still runs"]);
    assert!(emitter.event_names().is_empty());
    Ok(())
}

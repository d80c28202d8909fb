use evented::{EventEmitter, Evented, Listener};

#[evented::evented]
#[derive(Default)]
struct Clock {
    ticks: u64,
}

fn main() {
    let clock = Clock::default();
    clock.on("tick", Listener::new(|_, _| Ok(())));
    clock.emit("tick", &()).unwrap();

    let _: &EventEmitter = &clock.emitter;
    assert_eq!(clock.ticks, 0);
    assert_eq!(clock.listener_count("tick"), 1);
}

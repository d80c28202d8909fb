use evented::{EventEmitter, Evented, Listener};
use std::marker::PhantomData;

#[evented::evented(args = (String, u32), field = events)]
struct Channel<T> {
    name: String,
    marker: PhantomData<T>,
}

impl<T> Channel<T> {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            marker: PhantomData,
            events: EventEmitter::new(),
        }
    }
}

#[evented::evented(args = u8)]
struct Existing {
    emitter: EventEmitter<u8>,
}

fn main() {
    let channel: Channel<i32> = Channel::new("general");
    channel.once(
        "message",
        Listener::new(|_, (from, seq): &(String, u32)| {
            assert_eq!(from, "alice");
            assert_eq!(*seq, 1);
            Ok(())
        }),
    );
    channel.emit("message", &("alice".to_string(), 1)).unwrap();
    assert_eq!(channel.name, "general");
    assert!(channel.event_names().is_empty());

    let existing = Existing {
        emitter: EventEmitter::new(),
    };
    existing.set_max_listeners(1);
    assert_eq!(existing.max_listeners(), 1);
}

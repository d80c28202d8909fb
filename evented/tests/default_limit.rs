//! 进程级默认上限会被所有测试共享，因此放在独立的测试二进制中并串行断言。
use evented::{EmitterConfig, EmitterDefaults, EventEmitter, Listener, MaxListenersExceeded};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn default_limit_is_read_once_at_construction() {
    EmitterDefaults::reset();
    assert_eq!(EmitterDefaults::max_listeners(), 10);
    let before = EventEmitter::<()>::new();
    // 配置先于默认值变更构建，但注册表在变更之后构造
    let early_config = EmitterConfig::default();

    assert_eq!(EmitterDefaults::set_max_listeners(20), 10);
    assert_eq!(EmitterDefaults::max_listeners(), 20);
    let after = EventEmitter::<()>::new();
    let late = EventEmitter::<()>::with_config(early_config);

    assert_eq!(before.max_listeners(), 10);
    assert_eq!(after.max_listeners(), 20);
    assert_eq!(late.max_listeners(), 20);

    EmitterDefaults::set_max_listeners(json!("not a number"));
    assert_eq!(EmitterDefaults::max_listeners(), 0);

    EmitterDefaults::set_max_listeners(-100);
    assert_eq!(EmitterDefaults::max_listeners(), 0);

    EmitterDefaults::set_max_listeners(&json!(7.9));
    assert_eq!(EmitterDefaults::max_listeners(), 7);

    // 显式配置优先于默认值
    let explicit =
        EventEmitter::<()>::with_config(EmitterConfig::builder().max_listeners(3).build());
    assert_eq!(explicit.max_listeners(), 3);

    // 默认值为 0 时，第一个监听器即触发告警
    EmitterDefaults::set_max_listeners(0);
    let warnings = Rc::new(Cell::new(0));
    let sink = {
        let warnings = warnings.clone();
        move |_: &MaxListenersExceeded| warnings.set(warnings.get() + 1)
    };
    let strict = EventEmitter::<()>::with_config(
        EmitterConfig::builder().warning_sink(Rc::new(sink)).build(),
    );
    strict.on("a", Listener::new(|_, _| Ok(())));
    strict.on("a", Listener::new(|_, _| Ok(())));
    assert_eq!(warnings.get(), 1);

    EmitterDefaults::reset();
    assert_eq!(EmitterDefaults::max_listeners(), 10);
    assert_eq!(strict.max_listeners(), 0);
}

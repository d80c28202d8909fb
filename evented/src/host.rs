//! 宿主组合（Evented）
//!
//! 任意宿主类型持有一个 `EventEmitter` 字段并实现 `emitter()`，
//! 即可通过委托获得全部注册表操作，同时保留自身的字段、构造函数与行为。
//! `#[evented]` 宏会自动生成该字段与实现。
//!
use crate::emitter::EventEmitter;
use crate::error::EmitterResult;
use crate::key::EventKey;
use crate::limit::ListenerLimit;
use crate::listener::{Listener, RawListener};

/// 具备发布/订阅能力的类型
pub trait Evented<A = ()> {
    /// 被委托的注册表
    fn emitter(&self) -> &EventEmitter<A>;

    fn add_listener(&self, key: impl Into<EventKey>, listener: Listener<A>) -> &Self {
        self.emitter().add_listener(key, listener);
        self
    }

    fn on(&self, key: impl Into<EventKey>, listener: Listener<A>) -> &Self {
        self.emitter().on(key, listener);
        self
    }

    fn once(&self, key: impl Into<EventKey>, listener: Listener<A>) -> &Self {
        self.emitter().once(key, listener);
        self
    }

    fn remove_listener(&self, key: impl Into<EventKey>, listener: &Listener<A>) -> &Self {
        self.emitter().remove_listener(key, listener);
        self
    }

    fn off(&self, key: impl Into<EventKey>, listener: &Listener<A>) -> &Self {
        self.emitter().off(key, listener);
        self
    }

    fn remove_all_listeners(&self, key: impl Into<EventKey>) -> &Self {
        self.emitter().remove_all_listeners(key);
        self
    }

    fn clear(&self) -> &Self {
        self.emitter().clear();
        self
    }

    fn emit(&self, key: impl Into<EventKey>, args: &A) -> EmitterResult<&Self> {
        self.emitter().emit(key, args)?;
        Ok(self)
    }

    fn listener_count(&self, key: impl Into<EventKey>) -> usize {
        self.emitter().listener_count(key)
    }

    fn has_listeners(&self, key: impl Into<EventKey>) -> bool {
        self.emitter().has_listeners(key)
    }

    fn listeners(&self, key: impl Into<EventKey>) -> Vec<Listener<A>> {
        self.emitter().listeners(key)
    }

    fn raw_listeners(&self, key: impl Into<EventKey>) -> Vec<RawListener<A>> {
        self.emitter().raw_listeners(key)
    }

    fn event_names(&self) -> Vec<EventKey> {
        self.emitter().event_names()
    }

    fn max_listeners(&self) -> usize {
        self.emitter().max_listeners()
    }

    fn set_max_listeners(&self, limit: impl Into<ListenerLimit>) -> &Self {
        self.emitter().set_max_listeners(limit);
        self
    }
}

impl<A> Evented<A> for EventEmitter<A> {
    fn emitter(&self) -> &EventEmitter<A> {
        self
    }
}

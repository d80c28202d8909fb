//! 监听器（Listener）
//!
//! 监听器是对回调的引用计数句柄，身份即句柄指针：同一句柄的克隆彼此相等，
//! 两次 `Listener::new` 即使闭包体相同也互不相等。移除监听器时按身份匹配。
//!
use crate::emitter::EventEmitter;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

type ListenerFn<A> = dyn Fn(&EventEmitter<A>, &A) -> anyhow::Result<()>;

/// 监听器句柄
pub struct Listener<A = ()> {
    callback: Rc<ListenerFn<A>>,
}

impl<A> Listener<A> {
    /// 包装一个回调；回调以所属注册表作为接收者，并收到 `emit` 传入的参数
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&EventEmitter<A>, &A) -> anyhow::Result<()> + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// 两个句柄是否指向同一个回调
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }

    pub(crate) fn call(&self, emitter: &EventEmitter<A>, args: &A) -> anyhow::Result<()> {
        (self.callback)(emitter, args)
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<A> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<A> Eq for Listener<A> {}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

/// 监听器模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerMode {
    /// 调用后保留
    Persistent,
    /// 首次调用前即被移除
    Once,
}

/// `raw_listeners` 返回的视图：句柄及其模式
pub struct RawListener<A = ()> {
    pub listener: Listener<A>,
    pub mode: ListenerMode,
}

impl<A> Clone for RawListener<A> {
    fn clone(&self) -> Self {
        Self {
            listener: self.listener.clone(),
            mode: self.mode,
        }
    }
}

impl<A> fmt::Debug for RawListener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawListener")
            .field("listener", &self.listener)
            .field("mode", &self.mode)
            .finish()
    }
}

/// 注册记录
///
/// `consumed` 由活动序列与所有快照副本共享，一次性监听器据此保证最多触发一次，
/// 同时也是记录本身的身份。
pub(crate) struct ListenerRecord<A> {
    pub(crate) listener: Listener<A>,
    pub(crate) mode: ListenerMode,
    consumed: Rc<Cell<bool>>,
}

impl<A> ListenerRecord<A> {
    pub(crate) fn new(listener: Listener<A>, mode: ListenerMode) -> Self {
        Self {
            listener,
            mode,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub(crate) fn is_once(&self) -> bool {
        self.mode == ListenerMode::Once
    }

    pub(crate) fn same_record(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.consumed, &other.consumed)
    }

    /// 标记为已消费；返回此前是否已被消费
    pub(crate) fn consume(&self) -> bool {
        self.consumed.replace(true)
    }

    pub(crate) fn to_raw(&self) -> RawListener<A> {
        RawListener {
            listener: self.listener.clone(),
            mode: self.mode,
        }
    }
}

impl<A> Clone for ListenerRecord<A> {
    fn clone(&self) -> Self {
        Self {
            listener: self.listener.clone(),
            mode: self.mode,
            consumed: Rc::clone(&self.consumed),
        }
    }
}

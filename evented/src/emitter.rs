//! 监听器注册表（EventEmitter）
//!
//! 维护“事件键 → 有序监听器记录”的映射，并同步、按注册顺序触发监听器。
//!
//! 一致性约定：
//! - `emit` 在调用任何监听器之前复制当前序列（快照），快照决定“本轮谁会被调用”，
//!   活动序列决定“下一轮谁会被调用”；
//! - 本轮中新增的监听器不会在本轮被调用，本轮中被其他监听器移除的监听器仍会被调用；
//! - 一次性监听器在被调用之前就从活动序列中移除，并且跨嵌套的 `emit` 最多触发一次；
//! - 调用监听器与告警出口时不持有任何内部借用，监听器可以任意重入本注册表。
//!
use crate::config::EmitterConfig;
use crate::defaults::EmitterDefaults;
use crate::error::EmitterResult;
use crate::key::EventKey;
use crate::limit::ListenerLimit;
use crate::listener::{Listener, ListenerMode, ListenerRecord, RawListener};
use crate::warning::{MaxListenersExceeded, WarningSink};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use tracing::trace;

struct Registry<A> {
    // 空序列不保留键：缺失即“无监听器”
    listeners: IndexMap<EventKey, VecDeque<ListenerRecord<A>>>,
    max_listeners: ListenerLimit,
    warned: HashSet<EventKey>,
}

impl<A> Registry<A> {
    fn new(max_listeners: ListenerLimit) -> Self {
        Self {
            listeners: IndexMap::new(),
            max_listeners,
            warned: HashSet::new(),
        }
    }

    /// 插入记录；若本次插入首次使该键超限，返回告警内容
    fn insert(&mut self, key: EventKey, record: ListenerRecord<A>) -> Option<MaxListenersExceeded> {
        let records = self.listeners.entry(key.clone()).or_default();
        records.push_back(record);
        let count = records.len();

        if self.max_listeners.is_exceeded_by(count) && self.warned.insert(key.clone()) {
            return Some(MaxListenersExceeded {
                key,
                count,
                limit: self.max_listeners.value(),
            });
        }
        None
    }

    /// 按注册顺序移除第一条匹配的记录
    fn remove_first<P>(&mut self, key: &EventKey, matches: P) -> bool
    where
        P: Fn(&ListenerRecord<A>) -> bool,
    {
        let Some(records) = self.listeners.get_mut(key) else {
            return false;
        };
        let Some(index) = records.iter().position(matches) else {
            return false;
        };
        // 一次性记录按序触发，通常位于队首，`pop_front` 为 O(1)
        if index == 0 {
            records.pop_front();
        } else {
            records.remove(index);
        }
        if records.is_empty() {
            self.listeners.shift_remove(key);
        }
        true
    }

    fn records(&self, key: &EventKey) -> impl Iterator<Item = &ListenerRecord<A>> {
        self.listeners.get(key).into_iter().flatten()
    }

    fn count(&self, key: &EventKey) -> usize {
        self.listeners.get(key).map_or(0, VecDeque::len)
    }
}

/// 监听器注册表
///
/// `A` 为 `emit` 传给监听器的参数类型。注册表只在单线程内使用（`!Send`），
/// 所有操作都取 `&self`，因此监听器可以在被调用期间增删监听器或再次 `emit`。
///
/// # 示例
///
/// ```
/// use evented::{EventEmitter, Listener};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let total = Rc::new(Cell::new(0));
/// let emitter = EventEmitter::<u32>::new();
///
/// let sum = {
///     let total = total.clone();
///     Listener::new(move |_, n: &u32| {
///         total.set(total.get() + n);
///         Ok(())
///     })
/// };
///
/// emitter.on("add", sum.clone()).once("add", sum);
/// emitter.emit("add", &2)?.emit("add", &3)?;
///
/// assert_eq!(total.get(), 2 + 2 + 3);
/// assert_eq!(emitter.listener_count("add"), 1);
/// # Ok::<(), evented::EmitterError>(())
/// ```
pub struct EventEmitter<A = ()> {
    registry: RefCell<Registry<A>>,
    warning_sink: Rc<dyn WarningSink>,
}

impl<A> EventEmitter<A> {
    /// 使用默认配置创建注册表（此时读取进程级默认上限）
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// 使用给定配置创建注册表；未指定上限时在此刻读取进程级默认上限
    pub fn with_config(config: EmitterConfig) -> Self {
        let max_listeners = config
            .max_listeners
            .unwrap_or_else(|| ListenerLimit::new(EmitterDefaults::max_listeners()));
        Self {
            registry: RefCell::new(Registry::new(max_listeners)),
            warning_sink: config.warning_sink,
        }
    }

    /// 在序列末尾追加一个持久监听器
    pub fn add_listener(&self, key: impl Into<EventKey>, listener: Listener<A>) -> &Self {
        self.register(key.into(), listener, ListenerMode::Persistent)
    }

    /// `add_listener` 的别名
    pub fn on(&self, key: impl Into<EventKey>, listener: Listener<A>) -> &Self {
        self.add_listener(key, listener)
    }

    /// 在序列末尾追加一个一次性监听器
    pub fn once(&self, key: impl Into<EventKey>, listener: Listener<A>) -> &Self {
        self.register(key.into(), listener, ListenerMode::Once)
    }

    fn register(&self, key: EventKey, listener: Listener<A>, mode: ListenerMode) -> &Self {
        trace!(event = %key, ?mode, "listener added");
        let exceeded = self
            .registry
            .borrow_mut()
            .insert(key, ListenerRecord::new(listener, mode));

        if let Some(warning) = exceeded {
            self.warning_sink.warn(&warning);
        }
        self
    }

    /// 移除第一条与 `listener` 同一身份的记录；未找到时不做任何事
    pub fn remove_listener(&self, key: impl Into<EventKey>, listener: &Listener<A>) -> &Self {
        let key = key.into();
        let removed = self
            .registry
            .borrow_mut()
            .remove_first(&key, |record| record.listener.ptr_eq(listener));
        if removed {
            trace!(event = %key, "listener removed");
        }
        self
    }

    /// `remove_listener` 的别名
    pub fn off(&self, key: impl Into<EventKey>, listener: &Listener<A>) -> &Self {
        self.remove_listener(key, listener)
    }

    /// 移除某个事件键下的全部监听器
    pub fn remove_all_listeners(&self, key: impl Into<EventKey>) -> &Self {
        let key = key.into();
        self.registry.borrow_mut().listeners.shift_remove(&key);
        trace!(event = %key, "all listeners removed");
        self
    }

    /// 移除所有事件键下的全部监听器
    pub fn clear(&self) -> &Self {
        self.registry.borrow_mut().listeners.clear();
        trace!("registry cleared");
        self
    }

    /// 同步触发 `key` 下的监听器
    ///
    /// 监听器返回的第一个错误会中止本轮，并原样以 `EmitterError::Listener` 返回；
    /// 之后的监听器不会被调用，注册表状态保持一致。
    pub fn emit(&self, key: impl Into<EventKey>, args: &A) -> EmitterResult<&Self> {
        let key = key.into();
        let snapshot = match self.registry.borrow().listeners.get(&key) {
            Some(records) => records.iter().cloned().collect::<Vec<_>>(),
            None => return Ok(self),
        };
        trace!(event = %key, listeners = snapshot.len(), "emitting event");

        for record in &snapshot {
            if record.is_once() {
                if record.consume() {
                    continue;
                }
                self.registry
                    .borrow_mut()
                    .remove_first(&key, |live| live.same_record(record));
            }
            record.listener.call(self, args)?;
        }
        Ok(self)
    }

    pub fn listener_count(&self, key: impl Into<EventKey>) -> usize {
        self.registry.borrow().count(&key.into())
    }

    pub fn has_listeners(&self, key: impl Into<EventKey>) -> bool {
        self.listener_count(key) > 0
    }

    /// 按注册顺序返回监听器句柄的副本
    pub fn listeners(&self, key: impl Into<EventKey>) -> Vec<Listener<A>> {
        self.registry
            .borrow()
            .records(&key.into())
            .map(|record| record.listener.clone())
            .collect()
    }

    /// 与 `listeners` 相同，但附带每条记录的模式
    pub fn raw_listeners(&self, key: impl Into<EventKey>) -> Vec<RawListener<A>> {
        self.registry
            .borrow()
            .records(&key.into())
            .map(ListenerRecord::to_raw)
            .collect()
    }

    /// 当前拥有监听器的事件键，按首次注册顺序
    pub fn event_names(&self) -> Vec<EventKey> {
        self.registry.borrow().listeners.keys().cloned().collect()
    }

    pub fn max_listeners(&self) -> usize {
        self.registry.borrow().max_listeners.value()
    }

    /// 设置本实例的监听器上限（按非负整数强制转换）
    pub fn set_max_listeners(&self, limit: impl Into<ListenerLimit>) -> &Self {
        self.registry.borrow_mut().max_listeners = limit.into();
        self
    }
}

impl<A> Default for EventEmitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for EventEmitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        let counts: Vec<(String, usize)> = registry
            .listeners
            .iter()
            .map(|(key, records)| (key.to_string(), records.len()))
            .collect();
        f.debug_struct("EventEmitter")
            .field("listeners", &counts)
            .field("max_listeners", &registry.max_listeners)
            .finish()
    }
}

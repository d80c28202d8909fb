use proc_macro::TokenStream;

mod evented;
mod field_utils;

/// 宿主组合宏
/// - 追加字段：`emitter: ::evented::EventEmitter<Args>`（若缺失），置于字段末尾
/// - 自动为目标结构体实现 `::evented::Evented<Args>`，全部注册表操作委托给该字段
/// - 支持参数：`#[evented(args = Args, field = name)]`，默认 `args = ()`、`field = emitter`
///
/// 宿主自身的字段、派生、泛型与构造函数保持不变，构造时只需额外初始化该字段，
/// 例如 `emitter: EventEmitter::new()` 或 `..Default::default()`。
#[proc_macro_attribute]
pub fn evented(attr: TokenStream, item: TokenStream) -> TokenStream {
    evented::expand(attr, item)
}

use proc_macro::TokenStream;

mod request;
mod utils;

/// 请求宏
/// - 合并/追加派生：Debug, Clone, PartialEq, Serialize, Deserialize
/// - 自动为目标类型实现 `::mediator::request::Request`
/// - 参数：`#[request(response = Type, name = "Name")]`
///   - `response` 默认 `()`（发出即忘的命令）
///   - `name` 默认类型名，作为 span 与日志中的稳定名称
#[proc_macro_attribute]
pub fn request(attr: TokenStream, item: TokenStream) -> TokenStream {
    request::expand(attr, item)
}

//! 管道组装
//!
//! 启动期把有序的行为列表折叠到处理器外层，得到单一的续体；
//! 分发期只调用该续体，不再逐次拼装。
//!
use crate::behavior::{ChainFn, Next, PipelineBehavior, chain_fn};
use std::sync::Arc;

/// 由内向外包裹：`behaviors[0]` 位于最外层
pub(crate) fn compose(behaviors: &[Arc<dyn PipelineBehavior>], terminal: ChainFn) -> ChainFn {
    behaviors.iter().rev().fold(terminal, |inner, behavior| {
        let behavior = behavior.clone();

        chain_fn(move |request, ctx| {
            let behavior = behavior.clone();
            let next = Next::new(inner.clone());

            Box::pin(async move { behavior.handle(ctx, request, next).await })
        })
    })
}

use crate::{
    behavior::{BoxResponse, ChainFn, Next, PipelineBehavior, chain_fn},
    context::RequestContext,
    error::{MediatorError, MediatorResult},
    handler::RequestHandler,
    pipeline,
    request::Request,
    sender::Sender,
};
use async_trait::async_trait;
use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

struct Route {
    name: &'static str,
    chain: ChainFn,
}

/// 进程内中介者（Mediator）
///
/// - 通过 TypeId 将每种请求路由到唯一的处理器；
/// - 管道在构建期组装完成，运行期只读，可通过 `Arc` 在多个任务间共享，无需加锁；
/// - 以类型擦除方式调度，并在调用端还原响应类型。
pub struct Mediator {
    routes: HashMap<TypeId, Route>,
    behaviors: Vec<&'static str>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    /// 分发请求：依次经过所有行为，最终到达该请求类型的处理器
    pub async fn dispatch<R: Request>(
        &self,
        ctx: &RequestContext,
        request: R,
    ) -> MediatorResult<R::Response> {
        let Some(route) = self.routes.get(&TypeId::of::<R>()) else {
            return Err(MediatorError::HandlerNotFound(R::NAME));
        };

        let out = Next::new(route.chain.clone())
            .run(ctx, Box::new(request))
            .await?;

        match out.downcast::<R::Response>() {
            Ok(response) => Ok(*response),
            Err(_) => Err(MediatorError::TypeMismatch {
                expected: type_name::<R::Response>(),
                found: "unknown",
            }),
        }
    }

    /// 已注册的请求名称列表（只读视图）
    pub fn registered_requests(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.routes.values().map(|r| r.name).collect();
        names.sort_unstable();
        names
    }

    /// 行为名称，按执行顺序（由外到内）
    pub fn behaviors(&self) -> &[&'static str] {
        &self.behaviors
    }
}

#[async_trait]
impl Sender for Mediator {
    async fn send<R>(&self, ctx: &RequestContext, request: R) -> MediatorResult<R::Response>
    where
        R: Request,
    {
        self.dispatch(ctx, request).await
    }
}

/// 中介者构建器
///
/// 启动期一次性完成注册：
/// - `behavior`：按调用顺序追加行为，先追加者位于最外层；
/// - `register`：为请求类型注册唯一处理器，重复注册立即返回错误；
/// - `require`：声明必须存在处理器的请求类型，`build` 时校验。
#[derive(Default)]
pub struct MediatorBuilder {
    behaviors: Vec<Arc<dyn PipelineBehavior>>,
    handlers: HashMap<TypeId, Route>,
    required: Vec<(TypeId, &'static str)>,
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn behavior<B>(self, behavior: B) -> Self
    where
        B: PipelineBehavior + 'static,
    {
        self.shared_behavior(Arc::new(behavior))
    }

    pub fn shared_behavior(mut self, behavior: Arc<dyn PipelineBehavior>) -> Self {
        self.behaviors.push(behavior);
        self
    }

    /// 注册请求处理器
    pub fn register<R, H>(mut self, handler: Arc<H>) -> MediatorResult<Self>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let key = TypeId::of::<R>();
        if self.handlers.contains_key(&key) {
            return Err(MediatorError::AlreadyRegistered { request: R::NAME });
        }

        let terminal = chain_fn(move |request, ctx| {
            let handler = handler.clone();

            Box::pin(async move {
                // 键与闭包共享同一泛型 R，正常情况下 downcast 不会失败
                match request.into_any().downcast::<R>() {
                    Ok(request) => {
                        let response = handler.handle(ctx, *request).await?;
                        Ok(Box::new(response) as BoxResponse)
                    }
                    Err(_) => Err(MediatorError::TypeMismatch {
                        expected: R::NAME,
                        found: "unknown",
                    }),
                }
            })
        });

        self.handlers.insert(
            key,
            Route {
                name: R::NAME,
                chain: terminal,
            },
        );

        Ok(self)
    }

    pub fn require<R: Request>(mut self) -> Self {
        self.required.push((TypeId::of::<R>(), R::NAME));
        self
    }

    /// 校验必需的注册并组装所有管道
    pub fn build(self) -> MediatorResult<Mediator> {
        if let Some(&(_, request)) = self
            .required
            .iter()
            .find(|(key, _)| !self.handlers.contains_key(key))
        {
            return Err(MediatorError::MissingHandler { request });
        }

        let behaviors = self.behaviors;
        let routes = self
            .handlers
            .into_iter()
            .map(|(key, route)| {
                let chain = pipeline::compose(&behaviors, route.chain);
                (
                    key,
                    Route {
                        name: route.name,
                        chain,
                    },
                )
            })
            .collect::<HashMap<_, _>>();

        tracing::debug!(
            requests = routes.len(),
            behaviors = behaviors.len(),
            "mediator built"
        );

        Ok(Mediator {
            routes,
            behaviors: behaviors.iter().map(|b| b.name()).collect(),
        })
    }
}

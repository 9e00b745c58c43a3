use mediator::request;

/// 回显命令：处理器记录收到的消息，不返回数据
#[request(name = "SendEcho")]
#[derive(Default)]
pub struct SendEcho {
    #[serde(rename = "message", default)]
    pub message: String,
}

impl SendEcho {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

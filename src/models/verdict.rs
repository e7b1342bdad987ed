/// 分类服务对单个页面的回答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// 原始回答文本
    Answer(String),
    /// 没有得到回答（调用失败或内容为空）
    NoResponse,
}

impl Verdict {
    /// 空白回答等同于没有回答
    pub fn from_answer(answer: impl Into<String>) -> Self {
        let answer = answer.into();
        if answer.trim().is_empty() {
            Verdict::NoResponse
        } else {
            Verdict::Answer(answer)
        }
    }
}

/// 单个页面的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// 已在检查点中，跳过
    Skipped,
    /// 分类服务没有回答，不写检查点
    NoResponse,
    /// 检测到敏感信息并已写入记录
    Recorded { threat_count: u64 },
    /// 未检测到敏感信息，不写检查点
    Discarded,
}

//! 分类服务 - 业务能力层
//!
//! 只负责"判断一段页面正文里有没有密码/密钥"能力，不关心流程

use tracing::debug;

use crate::clients::{ChatTurn, Oracle, OracleRequest, SamplingParams};
use crate::error::OracleError;
use crate::models::Verdict;

const SYSTEM_PROMPT: &str =
    "You are an assistant that will detect passwords inside texts that are stored in Confluence pages.";

const PRIMING_PROMPT: &str = "I need to know if my users are storing passwords inside confluence pages, \
which is a bad practice and it's not allowed. I need you to verify this content and get the list of \
possible strings that are passwords. Be concise and just list me the words, ok?\n\n\
You need to answer in this format:\n\n\
I Detect {number of passwords/api keys} passwords/api keys.\n\n\
- <list of passwords>";

const PRIMING_ACK: &str = "Ok";

/// 确定性采样，回答长度上限 150 tokens
pub const SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.0,
    top_p: 1.0,
    frequency_penalty: 0.0,
    presence_penalty: 0.0,
    max_tokens: 150,
};

/// 分类服务
///
/// 职责：
/// - 构建固定的多轮对话
/// - 调用分类服务并返回原始回答
/// - 调用失败原样返回，由流程层按错误分类决定是否跳过
pub struct Classifier<O> {
    oracle: O,
}

impl<O: Oracle> Classifier<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// 构建请求：system → user(格式约定) → assistant(Ok) → user(页面正文)
    pub fn build_request(page_text: &str) -> OracleRequest {
        OracleRequest {
            messages: vec![
                ChatTurn::system(SYSTEM_PROMPT),
                ChatTurn::user(PRIMING_PROMPT),
                ChatTurn::assistant(PRIMING_ACK),
                ChatTurn::user(build_check_prompt(page_text)),
            ],
            sampling: SAMPLING,
        }
    }

    /// 判断页面正文
    ///
    /// 空白回答视为 `NoResponse`
    pub async fn classify(&self, page_text: &str) -> Result<Verdict, OracleError> {
        let request = Self::build_request(page_text);
        let answer = self.oracle.complete(&request).await?;
        debug!("分类服务回答: {}", answer);
        Ok(Verdict::from_answer(answer))
    }
}

fn build_check_prompt(page_text: &str) -> String {
    format!(
        "I need to know if my users are storing passwords inside confluence pages, which is a bad \
practice and it's not allowed. I need you to verify this content and get the list of possible \
strings that are passwords. Be concise and just list me the words.\n\n\
Check this content: \"{}\"",
        page_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ChatRole;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 按顺序返回预设结果的分类服务
    struct ScriptedOracle {
        replies: Mutex<Vec<Result<String, OracleError>>>,
        seen: Mutex<Vec<OracleRequest>>,
    }

    impl ScriptedOracle {
        fn new(replies: Vec<Result<String, OracleError>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Oracle for ScriptedOracle {
        async fn complete(&self, request: &OracleRequest) -> Result<String, OracleError> {
            self.seen.lock().unwrap().push(request.clone());
            self.replies.lock().unwrap().remove(0)
        }
    }

    #[test]
    fn test_request_shape() {
        let request = Classifier::<ScriptedOracle>::build_request("db_password=hunter2");

        let roles: Vec<ChatRole> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::System,
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User
            ]
        );
        assert!(request.messages[1]
            .content
            .contains("I Detect {number of passwords/api keys} passwords/api keys."));
        assert_eq!(request.messages[2].content, "Ok");
        assert!(request.messages[3]
            .content
            .ends_with("Check this content: \"db_password=hunter2\""));
    }

    #[test]
    fn test_sampling_is_deterministic_and_bounded() {
        let request = Classifier::<ScriptedOracle>::build_request("text");
        assert_eq!(request.sampling.temperature, 0.0);
        assert_eq!(request.sampling.top_p, 1.0);
        assert_eq!(request.sampling.max_tokens, 150);
    }

    #[tokio::test]
    async fn test_answer_is_passed_through() {
        let classifier = Classifier::new(ScriptedOracle::new(vec![Ok(
            "I Detect 1 passwords/api keys.\n- secret123".to_string(),
        )]));

        let verdict = classifier.classify("password: secret123").await.unwrap();
        assert_eq!(
            verdict,
            Verdict::Answer("I Detect 1 passwords/api keys.\n- secret123".to_string())
        );
        assert_eq!(classifier.oracle().seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_oracle_fault_is_returned() {
        let classifier = Classifier::new(ScriptedOracle::new(vec![Err(OracleError::Request {
            model: "gpt-4o".to_string(),
            message: "connection reset".to_string(),
        })]));

        assert!(matches!(
            classifier.classify("text").await,
            Err(OracleError::Request { .. })
        ));
    }

    #[tokio::test]
    async fn test_blank_answer_becomes_no_response() {
        let classifier = Classifier::new(ScriptedOracle::new(vec![Ok("  \n".to_string())]));
        assert_eq!(classifier.classify("text").await.unwrap(), Verdict::NoResponse);
    }
}

//! OpenAI 兼容的分类服务
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::debug;

use crate::clients::oracle::{ChatRole, ChatTurn, Oracle, OracleRequest};
use crate::config::Config;
use crate::error::OracleError;

/// 基于 chat completions 接口的分类服务
pub struct OpenAiOracle {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl OpenAiOracle {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
        }
    }

    fn request_error(&self, err: impl std::fmt::Display) -> OracleError {
        OracleError::Request {
            model: self.model_name.clone(),
            message: err.to_string(),
        }
    }

    fn convert_turn(&self, turn: &ChatTurn) -> Result<ChatCompletionRequestMessage, OracleError> {
        let message = match turn.role {
            ChatRole::System => ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(turn.content.as_str())
                    .build()
                    .map_err(|e| self.request_error(e))?,
            ),
            ChatRole::User => ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(turn.content.as_str())
                    .build()
                    .map_err(|e| self.request_error(e))?,
            ),
            ChatRole::Assistant => ChatCompletionRequestMessage::Assistant(
                ChatCompletionRequestAssistantMessageArgs::default()
                    .content(turn.content.as_str())
                    .build()
                    .map_err(|e| self.request_error(e))?,
            ),
        };
        Ok(message)
    }
}

#[async_trait]
impl Oracle for OpenAiOracle {
    async fn complete(&self, request: &OracleRequest) -> Result<String, OracleError> {
        debug!(
            "调用 LLM API，模型: {}，消息数: {}",
            self.model_name,
            request.messages.len()
        );

        let messages = request
            .messages
            .iter()
            .map(|turn| self.convert_turn(turn))
            .collect::<Result<Vec<_>, _>>()?;

        let sampling = request.sampling;
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(sampling.temperature)
            .top_p(sampling.top_p)
            .frequency_penalty(sampling.frequency_penalty)
            .presence_penalty(sampling.presence_penalty)
            .max_tokens(sampling.max_tokens)
            .build()
            .map_err(|e| self.request_error(e))?;

        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| self.request_error(e))?;

        debug!("LLM API 调用成功");

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| OracleError::EmptyResponse {
                model: self.model_name.clone(),
            })
    }
}

use serde::Deserialize;

use crate::error::ConfigError;

/// 程序配置
///
/// 启动时构建一次，按引用传入各个组件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- Confluence 配置 ---
    /// 站点根地址，例如 `https://domain.atlassian.net`
    pub confluence_base_url: String,
    pub confluence_username: String,
    pub confluence_api_token: String,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 已处理页面记录文件
    pub processed_pages_file: String,
    /// 单次 HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confluence_base_url: "https://domain.atlassian.net".to_string(),
            confluence_username: String::new(),
            confluence_api_token: String::new(),
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o".to_string(),
            processed_pages_file: "processed_pages.csv".to_string(),
            request_timeout_secs: 60,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置
    ///
    /// 顺序：`SCANNER_CONFIG` 指向的 TOML 文件（可选）→ 环境变量覆盖 → 校验
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("SCANNER_CONFIG") {
            Ok(path) => Self::from_toml_file(&path)?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|name| std::env::var(name).ok())?
            .validate()
    }

    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// 用外部键值覆盖配置项，`lookup` 返回 `None` 表示保持原值
    pub fn with_overrides<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |name: &str, current: String| lookup(name).unwrap_or(current);

        Ok(Self {
            confluence_base_url: string("CONFLUENCE_BASE_URL", self.confluence_base_url),
            confluence_username: string("CONFLUENCE_USERNAME", self.confluence_username),
            confluence_api_token: string("CONFLUENCE_API_TOKEN", self.confluence_api_token),
            llm_api_key: string("LLM_API_KEY", self.llm_api_key),
            llm_api_base_url: string("LLM_API_BASE_URL", self.llm_api_base_url),
            llm_model_name: string("LLM_MODEL_NAME", self.llm_model_name),
            processed_pages_file: string("PROCESSED_PAGES_FILE", self.processed_pages_file),
            request_timeout_secs: parse_override(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                "u64",
                self.request_timeout_secs,
            )?,
            verbose_logging: parse_override(
                &lookup,
                "VERBOSE_LOGGING",
                "bool",
                self.verbose_logging,
            )?,
        })
    }

    /// 校验必要配置并规整站点地址
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.confluence_base_url = self.confluence_base_url.trim_end_matches('/').to_string();
        if self.confluence_base_url.is_empty() {
            return Err(ConfigError::Missing {
                field: "confluence_base_url",
            });
        }
        if self.llm_api_key.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "llm_api_key",
            });
        }
        Ok(self)
    }
}

fn parse_override<F, T>(
    lookup: &F,
    var_name: &'static str,
    expected_type: &'static str,
    current: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var_name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var_name,
            value,
            expected_type,
        }),
        None => Ok(current),
    }
}

use thiserror::Error;

/// 错误分类
///
/// 编排层根据分类决定中止整个扫描还是跳过当前页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// 文档平台请求失败（空间列表、页面列表、正文获取）
    Transport,
    /// 分类服务失败
    Oracle,
    /// 检查点文件读写失败
    Store,
    /// 配置错误
    Config,
}

impl FaultKind {
    /// 只有分类服务的错误可以在单个页面内被吸收
    pub fn is_recoverable(self) -> bool {
        matches!(self, FaultKind::Oracle)
    }
}

/// 文档平台请求错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 返回非成功状态码
    #[error("返回非成功状态 ({endpoint}): HTTP {status}")]
    Status { endpoint: String, status: u16 },
    /// 响应体解析失败
    #[error("响应解析失败 ({endpoint}): {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// HTTP 客户端创建失败
    #[error("无法创建 HTTP 客户端: {0}")]
    Client(#[source] reqwest::Error),
}

/// 分类服务错误
#[derive(Debug, Error)]
pub enum OracleError {
    /// 请求构建或 API 调用失败
    #[error("分类服务调用失败 (模型: {model}): {message}")]
    Request { model: String, message: String },
    /// 返回结果中没有内容
    #[error("分类服务返回内容为空 (模型: {model})")]
    EmptyResponse { model: String },
}

/// 检查点文件错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("检查点文件读写失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("检查点文件格式错误 ({path} 第 {line} 行): {reason}")]
    Malformed {
        path: String,
        line: usize,
        reason: String,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("配置文件解析失败 {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("缺少必要配置: {field}")]
    Missing { field: &'static str },
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    Invalid {
        var_name: &'static str,
        value: String,
        expected_type: &'static str,
    },
}

/// 扫描流程的统一错误类型
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("平台错误: {0}")]
    Transport(#[from] TransportError),
    #[error("分类错误: {0}")]
    Oracle(#[from] OracleError),
    #[error("存储错误: {0}")]
    Store(#[from] StoreError),
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl ScanError {
    pub fn kind(&self) -> FaultKind {
        match self {
            ScanError::Transport(_) => FaultKind::Transport,
            ScanError::Oracle(_) => FaultKind::Oracle,
            ScanError::Store(_) => FaultKind::Store,
            ScanError::Config(_) => FaultKind::Config,
        }
    }
}

/// 扫描流程结果类型
pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_oracle_faults_are_recoverable() {
        assert!(FaultKind::Oracle.is_recoverable());
        assert!(!FaultKind::Transport.is_recoverable());
        assert!(!FaultKind::Store.is_recoverable());
        assert!(!FaultKind::Config.is_recoverable());
    }

    #[test]
    fn test_kind_follows_variant() {
        let err: ScanError = TransportError::Status {
            endpoint: "/wiki/rest/api/space".to_string(),
            status: 503,
        }
        .into();
        assert_eq!(err.kind(), FaultKind::Transport);
        assert!(err.to_string().contains("HTTP 503"));

        let err: ScanError = OracleError::EmptyResponse {
            model: "gpt-4o".to_string(),
        }
        .into();
        assert_eq!(err.kind(), FaultKind::Oracle);
    }
}

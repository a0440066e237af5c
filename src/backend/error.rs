//! 抓取错误分类

use thiserror::Error;

/// 抓取错误
///
/// 五个变体对单次操作都是终态：不重试、不熔断，
/// 由协调器把错误文本渲染进 Pokedex 页正文。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// 远端不存在该 Pokemon / 页
    #[error("pokemon not found")]
    NotFound,

    /// 远端限流
    #[error("too many requests")]
    RateLimited,

    /// 其他非成功状态码
    #[error("status code: {0}")]
    Unexpected(u16),

    /// 连接/超时失败
    #[error("network error: {0}")]
    Transport(String),

    /// 响应体解析失败
    #[error("invalid response: {0}")]
    Decode(String),
}

/// 抓取结果别名
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(FetchError::NotFound.to_string(), "pokemon not found");
        assert_eq!(FetchError::RateLimited.to_string(), "too many requests");
        assert_eq!(FetchError::Unexpected(500).to_string(), "status code: 500");
    }
}

//! API設定の定数定義

/// デフォルトの待ち受けポート
///
/// 環境変数 `PORT` が未設定の場合に使用する。
pub const DEFAULT_PORT: u16 = 5001;

/// バインドするホスト
///
/// 全インターフェースで待ち受ける。
pub const BIND_HOST: &str = "0.0.0.0";

/// 待ち受けポートの環境変数名
pub const ENV_PORT: &str = "PORT";

/// LLM API キーの環境変数名（未設定なら LLM 分類は無効）
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

/// LLM モデル名の環境変数名
pub const ENV_LLM_MODEL: &str = "SENTIMIX_LLM_MODEL";

/// LLM API ベース URL の環境変数名
pub const ENV_LLM_BASE_URL: &str = "SENTIMIX_LLM_BASE_URL";

/// LLM 呼び出しタイムアウト（秒）の環境変数名
pub const ENV_LLM_TIMEOUT_SECS: &str = "SENTIMIX_LLM_TIMEOUT_SECS";

use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub grading: GradingConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

/// 评分配置
///
/// 字母成绩刻度是配置驱动的：阈值由部署方给定，引擎不内置。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    pub letter_scale: Vec<LetterGradeStep>,
}

/// 字母成绩档位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterGradeStep {
    pub letter: String,
    pub min_percentage: f64, // 百分比下限（含）
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            letter_scale: vec![
                LetterGradeStep {
                    letter: "A".to_string(),
                    min_percentage: 90.0,
                },
                LetterGradeStep {
                    letter: "B".to_string(),
                    min_percentage: 80.0,
                },
                LetterGradeStep {
                    letter: "C".to_string(),
                    min_percentage: 70.0,
                },
                LetterGradeStep {
                    letter: "D".to_string(),
                    min_percentage: 60.0,
                },
                LetterGradeStep {
                    letter: "F".to_string(),
                    min_percentage: 0.0,
                },
            ],
        }
    }
}

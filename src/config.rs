use std::{collections::HashMap, ffi::OsString, path::PathBuf};

use crate::error::AppError;

pub const ENV_LOG: &str = "RECETARIO_LOG";
pub const ENV_SEED: &str = "RECETARIO_SEED";
pub const ENV_TOAST_SECONDS: &str = "RECETARIO_TOAST_SECONDS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// env_logger 的默认过滤级别
    pub log_filter: String,
    /// 启动时是否载入内置食材和菜谱
    pub seed: bool,
    pub toast_seconds: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "info".to_string(),
            seed: true,
            toast_seconds: 3.0,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("{} 不是布尔值: {}", key, other))),
    }
}

impl Config {
    /// 载入 .env（可选），返回实际读取的文件路径
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenv::dotenv().ok()
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_os_vars(std::env::vars_os())
    }

    /// 只检查本应用的键；其他变量即使不是 UTF-8 也忽略
    pub fn from_os_vars<I>(vars: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut known = HashMap::new();
        for (key, value) in vars {
            let Some(key) = key.to_str() else {
                continue;
            };
            if ![ENV_LOG, ENV_SEED, ENV_TOAST_SECONDS].contains(&key) {
                continue;
            }
            let value = value
                .into_string()
                .map_err(|_| AppError::Config(format!("{} 不是有效的 UTF-8", key)))?;
            known.insert(key.to_string(), value);
        }
        Self::from_vars(&known)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut config = Config::default();
        if let Some(filter) = vars.get(ENV_LOG)
            && !filter.trim().is_empty()
        {
            config.log_filter = filter.trim().to_string();
        }
        if let Some(seed) = vars.get(ENV_SEED) {
            config.seed = parse_bool(ENV_SEED, seed)?;
        }
        if let Some(seconds) = vars.get(ENV_TOAST_SECONDS) {
            let parsed = seconds.trim().parse::<f64>().map_err(|e| {
                AppError::Config(format!("{} 无法解析: {} ({})", ENV_TOAST_SECONDS, seconds, e))
            })?;
            if !parsed.is_finite() || parsed <= 0.0 {
                return Err(AppError::Config(format!(
                    "{} 必须为正数: {}",
                    ENV_TOAST_SECONDS, seconds
                )));
            }
            config.toast_seconds = parsed;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_vars(&vars(&[])).unwrap(), Config::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_vars(&vars(&[
            (ENV_LOG, "debug"),
            (ENV_SEED, "off"),
            (ENV_TOAST_SECONDS, "5"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "debug");
        assert!(!config.seed);
        assert_eq!(config.toast_seconds, 5.0);
    }

    #[cfg(unix)]
    #[test]
    fn ignores_unrelated_non_utf8_vars() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![
            (
                OsString::from("UNRELATED_BYTES"),
                OsString::from_vec(vec![0xff, 0xfe]),
            ),
            (
                OsString::from_vec(vec![0xff, 0x41]),
                OsString::from("x"),
            ),
            (OsString::from(ENV_SEED), OsString::from("false")),
        ];
        let config = Config::from_os_vars(vars).unwrap();
        assert!(!config.seed);
        assert_eq!(config.log_filter, "info");
    }

    #[cfg(unix)]
    #[test]
    fn rejects_non_utf8_known_var() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![(OsString::from(ENV_LOG), OsString::from_vec(vec![0xff]))];
        assert!(matches!(
            Config::from_os_vars(vars),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_vars(&vars(&[(ENV_SEED, "maybe")])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::from_vars(&vars(&[(ENV_TOAST_SECONDS, "-1")])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::from_vars(&vars(&[(ENV_TOAST_SECONDS, "pronto")])),
            Err(AppError::Config(_))
        ));
    }
}

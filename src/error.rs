/// 目录校验失败的种类，不携带任何提示文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogError {
    /// 去除首尾空白后名称为空
    BlankName,
    /// 与已有食材重名（忽略大小写）
    DuplicateName,
    /// 菜谱没有任何食材
    EmptyIngredientList,
    /// 去除首尾空白后做法为空
    BlankPreparation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Seed(String),
    Gui(String),
}

impl AppError {
    pub fn describe(&self) -> String {
        match self {
            AppError::Config(msg) => format!("配置错误: {}", msg),
            AppError::Seed(msg) => format!("初始数据错误: {}", msg),
            AppError::Gui(msg) => format!("界面启动失败: {}", msg),
        }
    }
}

#[test]
fn test_app_error_describe() {
    assert_eq!(
        AppError::Config("RECETARIO_SEED".to_string()).describe(),
        "配置错误: RECETARIO_SEED"
    );
    assert!(AppError::Seed("eof".to_string()).describe().ends_with("eof"));
}

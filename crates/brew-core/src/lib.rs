//! # Brew Core
//!
//! 飲品生產系統的核心資料模型與類型定義

pub mod ingredient;
pub mod inventory;
pub mod library;
pub mod recipe;

// Re-export 主要類型
pub use ingredient::Ingredient;
pub use inventory::Inventory;
pub use library::RecipeLibrary;
pub use recipe::Recipe;

use rust_decimal::Decimal;

/// 生產系統錯誤類型
///
/// 所有錯誤都是可恢復的局部結果，呼叫端可自行決定重試或放棄，
/// 不會造成程序終止。
#[derive(Debug, thiserror::Error)]
pub enum BrewError {
    #[error("容量已滿（上限 {capacity}），無法加入: {name}")]
    CapacityExceeded { name: String, capacity: usize },

    #[error("找不到配方: {0}")]
    RecipeNotFound(String),

    #[error("庫存不足: {name} 需要 {required}，現有 {available}")]
    InsufficientIngredients {
        name: String,
        required: Decimal,
        available: Decimal,
    },

    #[error("無效的份數: {0}")]
    InvalidServings(i64),

    #[error("配方已存在: {0}")]
    DuplicateRecipe(String),
}

pub type Result<T> = std::result::Result<T, BrewError>;

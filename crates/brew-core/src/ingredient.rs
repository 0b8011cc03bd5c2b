//! 原料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原料記錄（名稱 + 數量）
///
/// 名稱是原料的識別鍵。整個系統（庫存、配方、配方庫）採用同一個
/// 比對約定：區分大小寫的精確字串相等，不做任何正規化。
/// 名稱約定為非空字串；在配方中數量代表每份用量，在庫存中代表現有數量。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// 原料名稱（識別鍵）
    pub name: String,

    /// 數量（非負）
    pub quantity: Decimal,
}

impl Ingredient {
    /// 創建新的原料記錄
    pub fn new(name: String, quantity: Decimal) -> Self {
        Self { name, quantity }
    }
}

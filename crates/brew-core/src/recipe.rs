//! 配方模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BrewError, Ingredient, Result};

/// 配方：一種飲品的每份原料需求清單與批次產量
///
/// 需求清單內的原料名稱唯一（同名需求在加入時合併數量），
/// 需求數量代表每份用量，實際需求量一律為每份用量乘以份數，
/// 線性縮放、無最低量、無進位。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// 飲品名稱（配方庫中的識別鍵）
    beverage_name: String,

    /// 每份原料需求
    requirements: Vec<Ingredient>,

    /// 每批次產出的瓶數
    bottles_produced: u32,

    /// 原料需求種類上限
    max_requirements: usize,
}

impl Recipe {
    /// 創建新的配方
    pub fn new(beverage_name: String, max_requirements: usize, bottles_produced: u32) -> Self {
        Self {
            beverage_name,
            requirements: Vec::new(),
            bottles_produced,
            max_requirements,
        }
    }

    /// 加入一項每份原料需求
    ///
    /// 同名需求會合併數量；新名稱在達到需求種類上限後會被拒絕。
    pub fn add_requirement(&mut self, ingredient: Ingredient) -> Result<()> {
        if let Some(existing) = self
            .requirements
            .iter_mut()
            .find(|r| r.name == ingredient.name)
        {
            existing.quantity += ingredient.quantity;
            return Ok(());
        }

        if self.requirements.len() >= self.max_requirements {
            return Err(BrewError::CapacityExceeded {
                name: ingredient.name,
                capacity: self.max_requirements,
            });
        }

        self.requirements.push(ingredient);
        Ok(())
    }

    /// 獲取需求清單（唯讀視圖）
    pub fn requirements(&self) -> &[Ingredient] {
        &self.requirements
    }

    /// 計算指定份數的實際需求量
    ///
    /// 實際需求量 = 每份用量 × 份數
    pub fn scaled_requirements(&self, servings: u32) -> Vec<Ingredient> {
        let factor = Decimal::from(servings);
        self.requirements
            .iter()
            .map(|r| Ingredient::new(r.name.clone(), r.quantity * factor))
            .collect()
    }

    /// 獲取飲品名稱
    pub fn beverage_name(&self) -> &str {
        &self.beverage_name
    }

    /// 獲取每批次產出瓶數
    pub fn bottles_produced(&self) -> u32 {
        self.bottles_produced
    }

    /// 檢查需求清單是否已滿
    pub fn is_full(&self) -> bool {
        self.requirements.len() >= self.max_requirements
    }
}

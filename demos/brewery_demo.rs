//! 互動式批次生產示例
//!
//! 建立庫存與 Beer 配方，從標準輸入讀取份數，完成一次批次生產循環。

use std::io::{BufRead, Write};

use brew_core::{Ingredient, Inventory, Recipe, RecipeLibrary};
use brew_production::ProductionSystem;
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(stdin.lock(), stdout.lock())
}

/// 初始化日誌（級別可經 RUST_LOG 調整）
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 完整的批次生產循環，I/O 由呼叫端注入
fn run(mut input: impl BufRead, mut out: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "=== 飲品批次生產示例 ===\n")?;

    // 初始庫存
    let mut inventory = Inventory::new(100);
    for (name, quantity) in [
        ("Water", Decimal::from(100)),
        ("Malt", Decimal::from(50)),
        ("Hops", Decimal::from(20)),
        ("Yeast", Decimal::from(10)),
    ] {
        match inventory.add_ingredient(Ingredient::new(name.to_string(), quantity)) {
            Ok(()) => writeln!(out, "已加入原料: {} x {}", name, quantity)?,
            Err(err) => writeln!(out, "加入原料失敗: {}", err)?,
        }
    }

    show_inventory(&inventory, &mut out)?;

    // Beer 配方：每份用量
    let mut beer = Recipe::new("Beer".to_string(), 5, 100);
    beer.add_requirement(Ingredient::new("Water".to_string(), Decimal::new(5, 1)))?; // 0.5
    beer.add_requirement(Ingredient::new("Malt".to_string(), Decimal::new(2, 1)))?; // 0.2
    beer.add_requirement(Ingredient::new("Hops".to_string(), Decimal::new(5, 2)))?; // 0.05
    beer.add_requirement(Ingredient::new("Yeast".to_string(), Decimal::new(1, 2)))?; // 0.01

    let mut library = RecipeLibrary::new(50);
    match library.register(beer) {
        Ok(()) => writeln!(out, "已登錄配方: Beer")?,
        Err(err) => writeln!(out, "登錄配方失敗: {}", err)?,
    }

    let mut system = ProductionSystem::new(inventory, library);

    writeln!(out, "\n請輸入要生產的份數:")?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let servings: i64 = line.trim().parse()?;

    match system.make_batch("Beer", servings) {
        Ok(report) => {
            writeln!(
                out,
                "批次生產成功: {} 份 {}，產出 {} 瓶",
                report.servings, report.beverage_name, report.bottles_produced
            )?;
            writeln!(out, "本批次消耗:")?;
            for used in &report.consumed {
                writeln!(out, "  - {}: {}", used.name, used.quantity)?;
            }
        }
        Err(err) => writeln!(out, "批次生產失敗: {}", err)?,
    }

    system.bottle_batch();
    system.clean_container();

    show_inventory(system.inventory(), &mut out)?;

    Ok(())
}

/// 列出目前庫存
fn show_inventory(
    inventory: &Inventory,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "\n目前庫存:")?;
    for item in inventory.ingredients() {
        writeln!(out, "  - {}: {}", item.name, item.quantity)?;
    }
    Ok(())
}

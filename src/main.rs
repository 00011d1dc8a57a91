use std::cmp::Ordering;

use anyhow::{Context, Result};
use log::info;
use pagelist::config::Config;
use pagelist::constants::{CONFIG_FILE_NAME, EMPTY_PAGE, ERROR_NOT_AN_ARRAY, ERROR_USAGE};
use pagelist::logger::Logger;
use pagelist::{Items, ItemsStore, SortInfo};
use serde_json::Value;

/// A JSON record together with its position in the input file
struct Row {
    index: usize,
    value: Value,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        anyhow::bail!(ERROR_USAGE);
    };
    if path == "--init" {
        let target = args.next().unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
        return Config::generate_default_config(target);
    }
    // 1-based on the command line
    let page = match args.next() {
        Some(page) => page
            .parse::<usize>()
            .with_context(|| format!("Invalid page number: {}", page))?
            .saturating_sub(1),
        None => 0,
    };

    let config = Config::load()?;
    let _logger = Logger::from_config(&config)?;

    let content = std::fs::read_to_string(&path).with_context(|| format!("Failed to read input file: {}", path))?;
    let json: Value = serde_json::from_str(&content).with_context(|| format!("Failed to parse input file: {}", path))?;
    let Value::Array(records) = json else {
        anyhow::bail!(ERROR_NOT_AN_ARRAY);
    };
    info!("Loaded {} records from {}", records.len(), path);

    let id_field = config.data.id_field.clone();
    let mut items = Items::with_page_size(
        move |row: &Row| match row.value.get(&id_field) {
            Some(id) => value_text(id),
            None => row.index.to_string(),
        },
        config.paging.page_size,
    )?
    .add_all(records.into_iter().enumerate().map(|(index, value)| Row { index, value }));

    if !config.data.sort_field.is_empty() {
        let field = config.data.sort_field.clone();
        let sort = SortInfo::new(field.clone(), field.clone(), move |a: &Row, b: &Row| {
            compare_values(a.value.get(&field), b.value.get(&field))
        });
        items = items.sort_with(sort.ascending(config.data.ascending));
    }

    let store = ItemsStore::new(items);
    let mut snapshots = store.subscribe();
    store.update(|items| items.goto_page(page));
    snapshots.changed().await.context("Store closed before publishing")?;

    let snapshot = snapshots.borrow_and_update().clone();
    render(&snapshot);
    Ok(())
}

fn render(items: &Items<Row>) {
    let rows = items.page();
    if rows.is_empty() {
        println!("{}", EMPTY_PAGE);
    }
    for row in rows {
        println!("{:>6}  {}", items.identify(row), row.value);
    }

    let page_info = items.page_info();
    println!();
    println!("Page {} of {} ({})", page_info.page() + 1, page_info.pages(), page_info);
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Numbers compare numerically, everything else by its text; missing fields sort first
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let (a, b) = (a.as_f64().unwrap_or_default(), b.as_f64().unwrap_or_default());
            a.total_cmp(&b)
        }
        (Some(a), Some(b)) => value_text(a).cmp(&value_text(b)),
    }
}

use robomodoro_core::{menu_items, MenuItem};

/// One menu line, e.g. `[s] 👔 Work`.
pub fn render(item: &MenuItem) -> String {
    match item.key {
        Some(key) => format!("[{key}] {}", item.title),
        None => format!("    {}", item.title),
    }
}

pub fn run(completed: u64, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let items = menu_items(completed);
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            println!("{}", render(item));
        }
    }
    Ok(())
}

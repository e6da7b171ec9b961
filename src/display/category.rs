//! Category display formatting

use crate::models::Category;

use super::render_table;

/// Format categories as a table
pub fn format_category_table(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    render_table(
        &["ID", "Name", "Icon", "Color"],
        categories.iter().map(|c| {
            let name = if c.is_reserved() {
                format!("{} (reserved)", c.name)
            } else {
                c.name.clone()
            };
            vec![
                c.id.to_string(),
                name,
                c.icon.clone(),
                c.color.clone().unwrap_or_default(),
            ]
        }),
    )
}

/// Format category details for display
pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();
    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:    {}\n", category.id));
    output.push_str(&format!("  Icon:  {}\n", category.icon));
    if let Some(color) = &category.color {
        output.push_str(&format!("  Color: {}\n", color));
    }
    output
}

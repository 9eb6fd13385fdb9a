use crate::core::table::Table;

pub const TITLE: &str = "TEST PRODUCTS FOR MANUAL OWNERSHIP RESEARCH";
pub const SEPARATOR: char = '=';
pub const SEPARATOR_WIDTH: usize = 60;

pub const RESEARCH_STEPS: [&str; 4] = [
    "Look up the barcode in an external product database (e.g. Open Food Facts) to confirm the brand",
    "Research the corporate ownership chain behind the brand",
    "Identify the ultimate financial beneficiary",
    "Assign a confidence level to the ownership finding",
];

pub const CLOSING_LINE: &str = "Ready to proceed with manual research.";

pub fn banner() -> String {
    format!(
        "{}\n{}\n",
        TITLE,
        SEPARATOR.to_string().repeat(SEPARATOR_WIDTH)
    )
}

pub fn count_line(count: usize) -> String {
    format!("Loaded {} test products:", count)
}

/// The research checklist and closing line. Never depends on the loaded data.
pub fn checklist() -> String {
    let mut text = String::from("\nManual research process for each product:\n");
    for (i, step) in RESEARCH_STEPS.iter().enumerate() {
        text.push_str(&format!("  {}. {}\n", i + 1, step));
    }
    text.push('\n');
    text.push_str(CLOSING_LINE);
    text.push('\n');
    text
}

/// Full report text for `count` products rendered from `selection`.
pub fn render(count: usize, selection: &Table) -> String {
    format!(
        "{}{}\n{}\n{}",
        banner(),
        count_line(count),
        selection,
        checklist()
    )
}

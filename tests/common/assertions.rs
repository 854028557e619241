//! Custom assertion helpers for generated stylesheets.

use hywind::stylesheet::Stylesheet;

/// Assert the sheet contains exactly this rendered rule line
pub fn assert_has_rule(sheet: &Stylesheet, expected: &str) {
    let rendered: Vec<String> = sheet.rules().iter().map(|r| r.to_string()).collect();
    assert!(
        rendered.iter().any(|line| line.trim_end() == expected),
        "Expected rule `{expected}` not found among {} rules",
        rendered.len()
    );
}

/// Assert no selector appears twice
pub fn assert_unique_selectors(sheet: &Stylesheet) {
    let mut seen = std::collections::HashSet::new();
    for rule in sheet.rules() {
        assert!(
            seen.insert(rule.selector.as_str()),
            "Duplicate selector: {}",
            rule.selector
        );
    }
}

/// Index of the first rule with this selector
pub fn position_of(sheet: &Stylesheet, selector: &str) -> usize {
    sheet
        .rules()
        .iter()
        .position(|r| r.selector == selector)
        .unwrap_or_else(|| panic!("Selector {selector} not found"))
}

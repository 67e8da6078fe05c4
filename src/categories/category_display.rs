// src/categories/category_display.rs

/// Nome da categoria para exibição: primeira letra maiúscula, o resto como veio.
/// `"women"` vira `"Women"`; uma string vazia vira `"Products"`.
pub fn display_name(category_id: &str) -> String {
    let mut chars = category_id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Products".to_string(),
    }
}

pub const EMPTY_CATEGORY_MESSAGE: &str = "No products found in this category.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_letter() {
        assert_eq!(display_name("women"), "Women");
        assert_eq!(display_name("kids"), "Kids");
    }

    #[test]
    fn keeps_rest_untouched() {
        assert_eq!(display_name("mEN"), "MEN");
        assert_eq!(display_name("new-arrivals"), "New-arrivals");
    }

    #[test]
    fn handles_non_ascii_and_empty() {
        assert_eq!(display_name("ñiños"), "Ñiños");
        assert_eq!(display_name(""), "Products");
    }
}

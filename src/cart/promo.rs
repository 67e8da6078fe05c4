// src/cart/promo.rs

use crate::shared::shared_structs::Notice;

pub const PROMO_APPLIED_MESSAGE: &str = "Promo code applied! 10% discount";
pub const PROMO_INVALID_MESSAGE: &str = "Invalid promo code";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoOutcome {
    Applied,
    Rejected,
}

/// Compara o código digitado com o código aceito, sem diferenciar maiúsculas.
/// O resultado é apenas um aviso: os totais da sacola não mudam.
pub fn check_promo_code(input: &str, accepted: &str) -> PromoOutcome {
    if input.to_lowercase() == accepted.to_lowercase() {
        PromoOutcome::Applied
    } else {
        PromoOutcome::Rejected
    }
}

impl PromoOutcome {
    pub fn is_applied(self) -> bool {
        self == PromoOutcome::Applied
    }

    pub fn notice(self) -> Notice {
        match self {
            PromoOutcome::Applied => Notice::success(PROMO_APPLIED_MESSAGE),
            PromoOutcome::Rejected => Notice::error(PROMO_INVALID_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_code_in_any_case() {
        for input in ["discount", "DISCOUNT", "DisCount"] {
            assert_eq!(check_promo_code(input, "discount"), PromoOutcome::Applied, "{input}");
        }
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["", "disc", "discount ", " discount", "discounts", "10OFF"] {
            assert_eq!(check_promo_code(input, "discount"), PromoOutcome::Rejected, "{input:?}");
        }
    }

    #[test]
    fn accepted_code_comparison_ignores_its_case_too() {
        assert!(check_promo_code("spring", "SPRING").is_applied());
    }

    #[test]
    fn notices_match_outcome() {
        let applied = PromoOutcome::Applied.notice();
        assert!(applied.is_success());
        assert_eq!(applied.message, PROMO_APPLIED_MESSAGE);

        let rejected = PromoOutcome::Rejected.notice();
        assert!(!rejected.is_success());
        assert_eq!(rejected.message, PROMO_INVALID_MESSAGE);
    }
}

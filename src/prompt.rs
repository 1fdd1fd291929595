const VARIANT_A_PROMPT: &str = "You are Chatbot-A.\nFollow these rules:\n1. be friendly\n";
const VARIANT_B_PROMPT: &str = "You are Chatbot-B.\nFollow these rules:\n1. be sarcastic\n";
const FALLBACK_PROMPT: &str = "You are a helpful assistant.";

/// Maps a variant code to its fixed system prompt.
pub fn system_prompt(variant: Option<&str>) -> &'static str {
    match variant {
        Some("A") => VARIANT_A_PROMPT,
        Some("B") => VARIANT_B_PROMPT,
        _ => FALLBACK_PROMPT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_a_is_friendly() {
        let prompt = system_prompt(Some("A"));
        assert!(prompt.starts_with("You are Chatbot-A."));
        assert!(prompt.contains("be friendly"));
    }

    #[test]
    fn variant_b_is_sarcastic() {
        let prompt = system_prompt(Some("B"));
        assert!(prompt.starts_with("You are Chatbot-B."));
        assert!(prompt.contains("be sarcastic"));
    }

    #[test]
    fn anything_else_falls_back() {
        for code in [None, Some(""), Some("a"), Some("C"), Some("AB")] {
            assert_eq!(system_prompt(code), "You are a helpful assistant.");
        }
    }
}

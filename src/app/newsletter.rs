//! Newsletter signup stub
//!
//! There is no sending backend wired up yet; a submit logs the address and
//! confirms to the user. TODO: post to the list provider once the account
//! exists.

use tracing::info;

#[derive(Default)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    /// Handle a submit click. Empty input is ignored; otherwise the field
    /// resets and the caller gets a confirmation message to toast.
    pub fn submit(&mut self) -> Option<String> {
        let email = self.email.trim();
        if email.is_empty() {
            return None;
        }
        info!(email, "Newsletter signup recorded");
        self.email.clear();
        Some("Thanks for subscribing!".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_ignored() {
        let mut form = NewsletterForm::default();
        assert_eq!(form.submit(), None);

        form.email = "   ".to_string();
        assert_eq!(form.submit(), None);
        assert_eq!(form.email, "   ");
    }

    #[test]
    fn submit_confirms_and_resets() {
        let mut form = NewsletterForm {
            email: "someone@example.com".to_string(),
        };
        let message = form.submit().expect("submit should confirm");
        assert!(message.contains("subscrib"));
        assert!(form.email.is_empty());
    }
}

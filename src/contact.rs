#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Uncommitted contact form values. Lives as long as the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome shown to the visitor after submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitNotice {
    /// Messages are not delivered anywhere yet.
    NotImplemented,
}

impl SubmitNotice {
    /// Translation keys of the notice, headline first.
    pub fn message_keys(self) -> [&'static str; 2] {
        match self {
            SubmitNotice::NotImplemented => ["messageNotImplemented", "messageNotice"],
        }
    }
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Clears the draft. Nothing is sent.
    pub fn submit(&mut self) -> SubmitNotice {
        log::info!(
            "contact form submitted ({} chars), delivery not implemented",
            self.message.chars().count()
        );
        *self = FormDraft::default();
        SubmitNotice::NotImplemented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{translate, Language};

    #[test]
    fn test_submit_resets_draft() {
        let mut draft = FormDraft::default();
        assert!(draft.is_empty());
        draft.set(Field::Name, "Wael");
        draft.set(Field::Email, "someone@example.com");
        draft.set(Field::Message, "Hello there");
        assert_eq!(draft.get(Field::Email), "someone@example.com");
        assert!(!draft.is_empty());

        let notice = draft.submit();
        assert_eq!(notice, SubmitNotice::NotImplemented);
        assert_eq!(draft, FormDraft::default());
        assert_eq!(draft.get(Field::Name), "");
        assert_eq!(draft.get(Field::Message), "");
    }

    #[test]
    fn test_notice_is_translated() {
        for lang in Language::ALL {
            for key in SubmitNotice::NotImplemented.message_keys() {
                assert_ne!(translate(lang, key), key);
            }
        }
    }

    #[test]
    fn test_notice_does_not_claim_delivery() {
        let [headline, detail] = SubmitNotice::NotImplemented.message_keys();
        assert_eq!(headline, "messageNotImplemented");
        assert_eq!(
            translate(Language::English, headline),
            "Sending messages is not available yet."
        );
        assert_eq!(translate(Language::Arabic, headline), "إرسال الرسائل غير متاح بعد.");
        for lang in Language::ALL {
            let text = translate(lang, detail);
            assert!(!text.contains("will be sent"), "{text}");
            assert!(!text.contains("سيتم إرسال"), "{text}");
        }
    }

    #[test]
    fn test_keystrokes_overwrite_field() {
        let mut draft = FormDraft::default();
        draft.set(Field::Message, "H");
        draft.set(Field::Message, "Hi");
        assert_eq!(draft.message, "Hi");
        assert!(draft.name.is_empty());
    }
}

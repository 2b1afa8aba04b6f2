use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Arabic,
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Arabic, Language::English];

    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::Arabic => Direction::Rtl,
            Language::English => Direction::Ltr,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::Arabic => Language::English,
            Language::English => Language::Arabic,
        }
    }

    /// Name of the language in its own script, used on the toggle button.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Arabic => "العربية",
            Language::English => "English",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Language::Arabic),
            "en" => Ok(Language::English),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Content that may vary by the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizedText {
    Plain(&'static str),
    PerLanguage(&'static [(Language, &'static str)]),
}

impl LocalizedText {
    pub fn resolve(&self, language: Language) -> &'static str {
        resolve_localized(language, self)
    }
}

/// Resolves `text` for `language`, falling back to the Arabic entry and then
/// to an empty string.
pub fn resolve_localized(language: Language, text: &LocalizedText) -> &'static str {
    match text {
        LocalizedText::Plain(s) => *s,
        LocalizedText::PerLanguage(entries) => {
            let lookup = |lang: Language| {
                entries
                    .iter()
                    .find_map(|(l, s)| if *l == lang { Some(*s) } else { None })
            };
            lookup(language)
                .or_else(|| lookup(Language::Arabic))
                .unwrap_or("")
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

static ARABIC: LazyLock<Table> = LazyLock::new(|| {
    HashMap::from([
        ("home", "الرئيسية"),
        ("about", "عنّي"),
        ("projects", "المشاريع"),
        ("blog", "المقالات"),
        ("contact", "اتصل بي"),
        ("mentorship", "التدريب"),
        ("goToPage", "اذهب للصفحة"),
        ("readMore", "اقرأ المزيد"),
        ("back", "رجوع"),
        ("discoverMore", "اكتشف المزيد"),
        ("rightsReserved", "كل الحقوق محفوظة"),
        ("themeLight", "وضع النهار"),
        ("themeDark", "وضع الليل"),
        ("statYears", "سنوات خبرة"),
        ("statProjects", "مشروع"),
        ("statClients", "عميل"),
        ("contactInfo", "معلومات التواصل"),
        ("skills", "المهارات"),
        ("email", "البريد الإلكتروني"),
        ("phone", "الهاتف"),
        ("location", "الموقع"),
        ("name", "الاسم"),
        ("message", "الرسالة"),
        ("sendMessage", "أرسل رسالة"),
        ("sendMessageButton", "إرسال الرسالة"),
        ("messageNotice", "يمكنك التواصل عبر البريد الإلكتروني أو الهاتف حالياً."),
        ("messageNotImplemented", "إرسال الرسائل غير متاح بعد."),
        ("projectsSoon", "🔧 قريباً سيتم إضافة المشاريع..."),
        ("blogSoon", "📝 قريباً سيتم إضافة المقالات..."),
        ("whatIOffer", "ماذا تقدم؟"),
        ("startJourney", "ابدأ رحلتك"),
        ("freeConsultation", "احجز جلسة استشارية مجانية"),
        ("bookNow", "احجز الآن"),
        ("notFoundTitle", "الصفحة غير موجودة"),
        ("notFoundBody", "لا توجد صفحة بهذا العنوان."),
        ("backHome", "العودة إلى الرئيسية"),
    ])
});

static ENGLISH: LazyLock<Table> = LazyLock::new(|| {
    HashMap::from([
        ("home", "Home"),
        ("about", "About"),
        ("projects", "Projects"),
        ("blog", "Blog"),
        ("contact", "Contact"),
        ("mentorship", "Mentorship"),
        ("goToPage", "Go to page"),
        ("readMore", "Read more"),
        ("back", "Back"),
        ("discoverMore", "Discover More"),
        ("rightsReserved", "All rights reserved"),
        ("themeLight", "Light mode"),
        ("themeDark", "Dark mode"),
        ("statYears", "Years Exp"),
        ("statProjects", "Projects"),
        ("statClients", "Clients"),
        ("contactInfo", "Contact Info"),
        ("skills", "Skills"),
        ("email", "Email"),
        ("phone", "Phone"),
        ("location", "Location"),
        ("name", "Name"),
        ("message", "Message"),
        ("sendMessage", "Send Message"),
        ("sendMessageButton", "Send Message"),
        ("messageNotice", "Please reach out by email or phone for now."),
        ("messageNotImplemented", "Sending messages is not available yet."),
        ("projectsSoon", "🔧 Projects coming soon..."),
        ("blogSoon", "📝 Blog posts coming soon..."),
        ("whatIOffer", "What I Offer"),
        ("startJourney", "Start Your Journey"),
        ("freeConsultation", "Book a free consultation session"),
        ("bookNow", "Book Now"),
        ("notFoundTitle", "Page not found"),
        ("notFoundBody", "There is no page at this address."),
        ("backHome", "Back to home"),
    ])
});

fn table(language: Language) -> &'static Table {
    match language {
        Language::Arabic => &ARABIC,
        Language::English => &ENGLISH,
    }
}

/// Looks up `key` for `language`. Missing keys come back verbatim so they
/// show up on the page instead of failing the view.
pub fn translate(language: Language, key: &str) -> &str {
    match table(language).get(key) {
        Some(s) => *s,
        None => {
            log::trace!("missing {language} translation for {key:?}");
            key
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_translated_in_both_languages() {
        for lang in Language::ALL {
            for key in ARABIC.keys().chain(ENGLISH.keys()) {
                let s = translate(lang, key);
                assert!(!s.is_empty(), "{key} is empty for {lang}");
                assert_ne!(s, *key, "{key} is missing for {lang}");
            }
        }
        assert_eq!(ARABIC.len(), ENGLISH.len());
    }

    #[test]
    fn test_missing_key_returned_verbatim() {
        assert_eq!(translate(Language::Arabic, "noSuchKey"), "noSuchKey");
        assert_eq!(translate(Language::English, ""), "");
    }

    #[test]
    fn test_nav_labels() {
        assert_eq!(translate(Language::English, "mentorship"), "Mentorship");
        assert_eq!(translate(Language::Arabic, "home"), "الرئيسية");
    }

    #[test]
    fn test_plain_text_ignores_language() {
        let text = LocalizedText::Plain("Dubai, UAE");
        for lang in Language::ALL {
            assert_eq!(resolve_localized(lang, &text), "Dubai, UAE");
        }
    }

    #[test]
    fn test_missing_language_falls_back_to_arabic() {
        let text = LocalizedText::PerLanguage(&[(Language::Arabic, "مرحبا")]);
        assert_eq!(resolve_localized(Language::English, &text), "مرحبا");

        let text = LocalizedText::PerLanguage(&[
            (Language::Arabic, "مرحبا"),
            (Language::English, "Hello"),
        ]);
        assert_eq!(text.resolve(Language::English), "Hello");
        assert_eq!(text.resolve(Language::Arabic), "مرحبا");

        let empty = LocalizedText::PerLanguage(&[(Language::English, "Hello")]);
        assert_eq!(empty.resolve(Language::Arabic), "");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("ar".parse::<Language>(), Ok(Language::Arabic));
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(Language::default(), Language::Arabic);
        assert_eq!(Language::Arabic.direction().as_str(), "rtl");
        assert_eq!(Language::English.other(), Language::Arabic);
    }
}

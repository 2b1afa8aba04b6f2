use crate::{
    i18n::{Language::*, LocalizedText},
    routes::Page,
};

pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Stat {
    pub number: u32,
    pub label_key: &'static str,
    /// Seconds before the counter starts.
    pub delay: f64,
}

pub struct Skill {
    pub name: LocalizedText,
    pub level: u8,
}

pub struct Feature {
    pub page: Page,
    pub description: LocalizedText,
    pub accent: &'static str,
}

pub struct Site {
    pub brand: LocalizedText,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: LocalizedText,
    pub socials: &'static [Social],
    pub headline: LocalizedText,
    pub bio: LocalizedText,
    pub mentorship_intro: LocalizedText,
    pub mentorship_offers: &'static [LocalizedText],
    pub stats: &'static [Stat],
    pub skills: &'static [Skill],
    pub features: &'static [Feature],
}

pub static SITE: Site = Site {
    brand: LocalizedText::PerLanguage(&[(Arabic, "وائل العشري"), (English, "Wael Alashri")]),
    email: "waelalashri07@icloud.com",
    phone: "+971-583028215",
    location: LocalizedText::Plain("Dubai, UAE"),
    socials: &[
        Social {
            label: "GitHub",
            href: "https://github.com/WanoX7",
        },
        Social {
            label: "LinkedIn",
            href: "https://linkedin.com/in/wano-x7",
        },
    ],
    headline: LocalizedText::PerLanguage(&[
        (Arabic, "مهندس أمن سيبراني وذكاء اصطناعي"),
        (English, "Cybersecurity & AI Engineer"),
    ]),
    bio: LocalizedText::PerLanguage(&[
        (
            Arabic,
            "خبير في تطوير حلول الذكاء الاصطناعي وتأمين الأنظمة ضد الهجمات الإلكترونية، أقدّم استشارات ومشاريع عالية الجودة تجمع بين التقنية والأمان.",
        ),
        (
            English,
            "Expert in AI development and cybersecurity solutions, providing high-quality consultancy and secure digital products.",
        ),
    ]),
    mentorship_intro: LocalizedText::PerLanguage(&[
        (
            Arabic,
            "برنامج تدريب ومتابعة مخصص لتطوير المهارات التقنية والمهنية في الأمن السيبراني والذكاء الاصطناعي",
        ),
        (English, "Hands-on mentorship and ongoing follow-up in Cybersecurity & AI."),
    ]),
    mentorship_offers: &[
        LocalizedText::PerLanguage(&[(Arabic, "تقييم المهارات الحالية"), (English, "Skills assessment")]),
        LocalizedText::PerLanguage(&[
            (Arabic, "خطة تطوير شخصية"),
            (English, "Personal development plan"),
        ]),
        LocalizedText::PerLanguage(&[
            (Arabic, "مشاريع عملية حقيقية"),
            (English, "Real practical projects"),
        ]),
        LocalizedText::PerLanguage(&[(Arabic, "متابعة أسبوعية"), (English, "Weekly follow-ups")]),
    ],
    stats: &[
        Stat {
            number: 7,
            label_key: "statYears",
            delay: 0.7,
        },
        Stat {
            number: 24,
            label_key: "statProjects",
            delay: 0.8,
        },
        Stat {
            number: 12,
            label_key: "statClients",
            delay: 0.9,
        },
    ],
    skills: &[
        Skill {
            name: LocalizedText::PerLanguage(&[(Arabic, "الأمن السيبراني"), (English, "Cybersecurity")]),
            level: 90,
        },
        Skill {
            name: LocalizedText::PerLanguage(&[
                (Arabic, "الذكاء الاصطناعي"),
                (English, "Artificial Intelligence"),
            ]),
            level: 85,
        },
        Skill {
            name: LocalizedText::PerLanguage(&[(Arabic, "تطوير الويب"), (English, "Web Development")]),
            level: 80,
        },
        Skill {
            name: LocalizedText::PerLanguage(&[(Arabic, "تحليل البيانات"), (English, "Data Analysis")]),
            level: 75,
        },
    ],
    features: &[
        Feature {
            page: Page::About,
            description: LocalizedText::PerLanguage(&[
                (
                    Arabic,
                    "خبير في تطوير حلول الذكاء الاصطناعي وتأمين الأنظمة ضد الهجمات الإلكترونية.",
                ),
                (English, "AI development and cybersecurity expertise."),
            ]),
            accent: "from-purple-500 to-pink-500",
        },
        Feature {
            page: Page::Projects,
            description: LocalizedText::PerLanguage(&[
                (Arabic, "نماذج من أعمالي ومشاريعي في الأمن السيبراني"),
                (English, "My cybersecurity projects and works"),
            ]),
            accent: "from-blue-500 to-cyan-500",
        },
        Feature {
            page: Page::Blog,
            description: LocalizedText::PerLanguage(&[
                (Arabic, "مقالات وتقنيات متقدمة في الأمن السيبراني"),
                (English, "Advanced cybersecurity articles and techniques"),
            ]),
            accent: "from-green-500 to-emerald-500",
        },
        Feature {
            page: Page::Mentorship,
            description: LocalizedText::PerLanguage(&[
                (Arabic, "برامج تدريب وإرشاد متخصصة"),
                (English, "Specialized training and mentorship programs"),
            ]),
            accent: "from-orange-500 to-red-500",
        },
        Feature {
            page: Page::Contact,
            description: LocalizedText::PerLanguage(&[
                (Arabic, "وسائل التواصل المختلفة للتعاون"),
                (English, "Various contact methods for collaboration"),
            ]),
            accent: "from-indigo-500 to-purple-500",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{translate, Language};

    fn all_text() -> Vec<LocalizedText> {
        let mut texts = vec![
            SITE.brand,
            SITE.location,
            SITE.headline,
            SITE.bio,
            SITE.mentorship_intro,
        ];
        texts.extend(SITE.mentorship_offers.iter().copied());
        texts.extend(SITE.skills.iter().map(|s| s.name));
        texts.extend(SITE.features.iter().map(|f| f.description));
        texts
    }

    #[test]
    fn test_content_resolves_in_both_languages() {
        for lang in Language::ALL {
            for text in all_text() {
                assert!(!text.resolve(lang).is_empty(), "{text:?} empty for {lang}");
            }
        }
    }

    #[test]
    fn test_stat_labels_translated() {
        for stat in SITE.stats {
            assert_ne!(translate(Language::English, stat.label_key), stat.label_key);
        }
        let numbers = SITE.stats.iter().map(|s| s.number).collect::<Vec<_>>();
        assert_eq!(numbers, vec![7, 24, 12]);
    }

    #[test]
    fn test_features_skip_home() {
        assert_eq!(SITE.features.len(), 5);
        assert!(SITE.features.iter().all(|f| f.page != Page::Home));
        assert!(SITE.skills.iter().all(|s| s.level <= 100));
    }
}

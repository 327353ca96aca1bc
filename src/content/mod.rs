//! Static lesson content.
//!
//! The catalog is built once on first access and shared read-only by every
//! screen. Lessons are sequences of blocks: trilingual paragraphs, tables
//! (conjugations, letter charts) and outline diagrams.

mod diagram;
mod word_frequency;

pub use diagram::{Diagram, DiagramError, DiagramNode};
pub use word_frequency::{quran_word_frequency, CumulativeRow, WordCount, WordFrequencyTable};

use crate::theme::FixedSection;
use once_cell::sync::Lazy;

/// Top-level content sections shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Alphabet,
    Nouns,
    Verbs,
    Particles,
    Vocabulary,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Alphabet,
        SectionId::Nouns,
        SectionId::Verbs,
        SectionId::Particles,
        SectionId::Vocabulary,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Alphabet => "Alphabet",
            SectionId::Nouns => "Nouns",
            SectionId::Verbs => "Verbs",
            SectionId::Particles => "Particles",
            SectionId::Vocabulary => "Vocabulary",
        }
    }

    /// Sections with their own palette; the rest follow the user's variant.
    pub fn fixed_palette(self) -> Option<FixedSection> {
        match self {
            SectionId::Nouns => Some(FixedSection::Nouns),
            SectionId::Verbs => Some(FixedSection::Verbs),
            SectionId::Particles => Some(FixedSection::Particles),
            SectionId::Alphabet | SectionId::Vocabulary => None,
        }
    }
}

/// A lesson, addressed by its section and 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LessonId {
    pub section: SectionId,
    pub number: u16,
}

impl LessonId {
    pub const fn new(section: SectionId, number: u16) -> Self {
        Self { section, number }
    }
}

/// The same text in Arabic, Urdu and English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub ar: &'static str,
    pub ur: &'static str,
    pub en: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Text),
    Table {
        caption: &'static str,
        headers: Vec<&'static str>,
        rows: Vec<Vec<&'static str>>,
    },
    /// Indented outline rendered as boxes; see [`Diagram::from_outline`].
    Diagram {
        caption: &'static str,
        outline: Vec<&'static str>,
    },
}

#[derive(Debug, Clone)]
pub struct Lesson {
    pub id: LessonId,
    pub title: Text,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub title: Text,
    pub lessons: Vec<Lesson>,
}

static CATALOG: Lazy<Vec<Section>> = Lazy::new(build_catalog);

pub fn catalog() -> &'static [Section] {
    &CATALOG
}

pub fn find_section(id: SectionId) -> Option<&'static Section> {
    catalog().iter().find(|s| s.id == id)
}

pub fn find_lesson(id: LessonId) -> Option<&'static Lesson> {
    find_section(id.section)?.lessons.iter().find(|l| l.id == id)
}

fn text(ar: &'static str, ur: &'static str, en: &'static str) -> Text {
    Text { ar, ur, en }
}

fn build_catalog() -> Vec<Section> {
    vec![
        Section {
            id: SectionId::Alphabet,
            title: text("الحروف", "حروفِ تہجی", "Alphabet"),
            lessons: alphabet_lessons(),
        },
        Section {
            id: SectionId::Nouns,
            title: text("الاسم", "اسم", "Nouns"),
            lessons: noun_lessons(),
        },
        Section {
            id: SectionId::Verbs,
            title: text("الفعل", "فعل", "Verbs"),
            lessons: verb_lessons(),
        },
        Section {
            id: SectionId::Particles,
            title: text("الحرف", "حرف", "Particles"),
            lessons: particle_lessons(),
        },
        Section {
            id: SectionId::Vocabulary,
            title: text("المفردات", "ذخیرۂ الفاظ", "Vocabulary"),
            lessons: vocabulary_lessons(),
        },
    ]
}

fn alphabet_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: LessonId::new(SectionId::Alphabet, 1),
            title: text("الحروف الهجائية", "عربی حروف", "The Arabic letters"),
            blocks: vec![
                Block::Paragraph(text(
                    "الحروف الهجائية ثمانية وعشرون حرفًا",
                    "عربی زبان میں اٹھائیس حروف ہیں",
                    "Arabic has twenty-eight letters, written right to left.",
                )),
                Block::Table {
                    caption: "Letters",
                    headers: vec!["Letter", "Name", "Sound"],
                    rows: vec![
                        vec!["ا", "ألف", "a"],
                        vec!["ب", "باء", "b"],
                        vec!["ت", "تاء", "t"],
                        vec!["ث", "ثاء", "th"],
                        vec!["ج", "جيم", "j"],
                        vec!["ح", "حاء", "ḥ"],
                        vec!["خ", "خاء", "kh"],
                    ],
                },
            ],
        },
        Lesson {
            id: LessonId::new(SectionId::Alphabet, 2),
            title: text("الحروف الشمسية والقمرية", "شمسی اور قمری حروف", "Sun and moon letters"),
            blocks: vec![
                Block::Paragraph(text(
                    "تُدغم لام التعريف في الحروف الشمسية",
                    "شمسی حروف سے پہلے الف لام کا لام پڑھا نہیں جاتا",
                    "Before a sun letter the lam of the definite article is assimilated.",
                )),
                Block::Table {
                    caption: "Examples",
                    headers: vec!["Word", "Letter type", "Reading"],
                    rows: vec![
                        vec!["الشَّمْس", "Sun", "ash-shams"],
                        vec!["النُّور", "Sun", "an-nūr"],
                        vec!["القَمَر", "Moon", "al-qamar"],
                        vec!["الكِتَاب", "Moon", "al-kitāb"],
                    ],
                },
            ],
        },
    ]
}

fn noun_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: LessonId::new(SectionId::Nouns, 1),
            title: text("أقسام الكلمة", "کلمہ کی اقسام", "Kinds of words"),
            blocks: vec![
                Block::Paragraph(text(
                    "الكلمة اسم وفعل وحرف",
                    "کلمہ کی تین قسمیں ہیں: اسم، فعل اور حرف",
                    "Every word is a noun, a verb or a particle.",
                )),
                Block::Diagram {
                    caption: "Word",
                    outline: vec![
                        "کلمہ (Word)",
                        "  اسم (Noun)",
                        "    معرفہ (Definite)",
                        "    نکرہ (Indefinite)",
                        "  فعل (Verb)",
                        "    ماضی (Past)",
                        "    مضارع (Present)",
                        "    امر (Command)",
                        "  حرف (Particle)",
                    ],
                },
            ],
        },
        Lesson {
            id: LessonId::new(SectionId::Nouns, 2),
            title: text("المذكر والمؤنث", "مذکر اور مؤنث", "Gender and number"),
            blocks: vec![
                Block::Paragraph(text(
                    "الاسم مفرد ومثنى وجمع",
                    "اسم واحد، تثنیہ یا جمع ہوتا ہے",
                    "A noun is singular, dual or plural, and masculine or feminine.",
                )),
                Block::Table {
                    caption: "مُسْلِم",
                    headers: vec!["", "Singular", "Dual", "Plural"],
                    rows: vec![
                        vec!["Masculine", "مُسْلِمٌ", "مُسْلِمَانِ", "مُسْلِمُونَ"],
                        vec!["Feminine", "مُسْلِمَةٌ", "مُسْلِمَتَانِ", "مُسْلِمَاتٌ"],
                    ],
                },
            ],
        },
    ]
}

fn verb_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: LessonId::new(SectionId::Verbs, 1),
            title: text("الفعل الماضي", "فعل ماضی", "Past tense"),
            blocks: vec![
                Block::Paragraph(text(
                    "الفعل الماضي يدل على حدث وقع في الزمن الماضي",
                    "فعل ماضی گزرے ہوئے زمانے میں کسی کام کے ہونے کو بتاتا ہے",
                    "The past tense reports a completed action.",
                )),
                Block::Table {
                    caption: "فَعَلَ",
                    headers: vec!["Pronoun", "Verb", "Meaning"],
                    rows: vec![
                        vec!["هُوَ", "فَعَلَ", "he did"],
                        vec!["هُمَا", "فَعَلَا", "they both did"],
                        vec!["هُمْ", "فَعَلُوا", "they did"],
                        vec!["هِيَ", "فَعَلَتْ", "she did"],
                        vec!["هُمَا", "فَعَلَتَا", "they both (f) did"],
                        vec!["هُنَّ", "فَعَلْنَ", "they (f) did"],
                        vec!["أَنْتَ", "فَعَلْتَ", "you did"],
                        vec!["أَنْتُمَا", "فَعَلْتُمَا", "you both did"],
                        vec!["أَنْتُمْ", "فَعَلْتُمْ", "you all did"],
                        vec!["أَنْتِ", "فَعَلْتِ", "you (f) did"],
                        vec!["أَنْتُنَّ", "فَعَلْتُنَّ", "you all (f) did"],
                        vec!["أَنَا", "فَعَلْتُ", "I did"],
                        vec!["نَحْنُ", "فَعَلْنَا", "we did"],
                    ],
                },
            ],
        },
        Lesson {
            id: LessonId::new(SectionId::Verbs, 2),
            title: text("الفعل المضارع", "فعل مضارع", "Present tense"),
            blocks: vec![
                Block::Paragraph(text(
                    "الفعل المضارع يدل على الحال أو الاستقبال",
                    "فعل مضارع حال یا مستقبل کے لیے آتا ہے",
                    "The present tense covers ongoing and future actions.",
                )),
                Block::Table {
                    caption: "يَفْعَلُ",
                    headers: vec!["Pronoun", "Verb", "Meaning"],
                    rows: vec![
                        vec!["هُوَ", "يَفْعَلُ", "he does"],
                        vec!["هُمَا", "يَفْعَلَانِ", "they both do"],
                        vec!["هُمْ", "يَفْعَلُونَ", "they do"],
                        vec!["هِيَ", "تَفْعَلُ", "she does"],
                        vec!["هُنَّ", "يَفْعَلْنَ", "they (f) do"],
                        vec!["أَنْتَ", "تَفْعَلُ", "you do"],
                        vec!["أَنْتُمْ", "تَفْعَلُونَ", "you all do"],
                        vec!["أَنْتِ", "تَفْعَلِينَ", "you (f) do"],
                        vec!["أَنْتُنَّ", "تَفْعَلْنَ", "you all (f) do"],
                        vec!["أَنَا", "أَفْعَلُ", "I do"],
                        vec!["نَحْنُ", "نَفْعَلُ", "we do"],
                    ],
                },
            ],
        },
        Lesson {
            id: LessonId::new(SectionId::Verbs, 3),
            title: text("أبواب الفعل الثلاثي", "ثلاثی مجرد کے ابواب", "Triliteral verb patterns"),
            blocks: vec![Block::Diagram {
                caption: "Patterns",
                outline: vec![
                    "فعل ثلاثی مجرد",
                    "  فَعَلَ يَفْعُلُ (نَصَرَ)",
                    "  فَعَلَ يَفْعِلُ (ضَرَبَ)",
                    "  فَعَلَ يَفْعَلُ (فَتَحَ)",
                    "  فَعِلَ يَفْعَلُ (سَمِعَ)",
                    "  فَعُلَ يَفْعُلُ (كَرُمَ)",
                    "  فَعِلَ يَفْعِلُ (حَسِبَ)",
                ],
            }],
        },
    ]
}

fn particle_lessons() -> Vec<Lesson> {
    vec![Lesson {
        id: LessonId::new(SectionId::Particles, 1),
        title: text("حروف الجر", "حروفِ جار", "Prepositions"),
        blocks: vec![
            Block::Paragraph(text(
                "حروف الجر تجر الاسم بعدها",
                "حروفِ جار اپنے بعد والے اسم کو زیر دیتے ہیں",
                "A preposition puts the following noun in the genitive case.",
            )),
            Block::Table {
                caption: "Common prepositions",
                headers: vec!["Particle", "Urdu", "English"],
                rows: vec![
                    vec!["مِنْ", "سے", "from"],
                    vec!["إِلَىٰ", "کی طرف", "to"],
                    vec!["فِي", "میں", "in"],
                    vec!["عَلَىٰ", "پر", "on"],
                    vec!["بِ", "کے ساتھ", "with"],
                    vec!["لِ", "کے لیے", "for"],
                ],
            },
        ],
    }]
}

fn vocabulary_lessons() -> Vec<Lesson> {
    vec![Lesson {
        id: LessonId::new(SectionId::Vocabulary, 1),
        title: text("كلمات أساسية", "بنیادی الفاظ", "Core words"),
        blocks: vec![Block::Table {
            caption: "Nouns",
            headers: vec!["Arabic", "Urdu", "English"],
            rows: vec![
                vec!["كِتَاب", "کتاب", "book"],
                vec!["رَسُول", "رسول", "messenger"],
                vec!["يَوْم", "دن", "day"],
                vec!["أَرْض", "زمین", "earth"],
                vec!["سَمَاء", "آسمان", "sky"],
            ],
        }],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_lessons() {
        for id in SectionId::ALL {
            let section = find_section(id).unwrap();
            assert!(!section.lessons.is_empty(), "{:?} has no lessons", id);
        }
    }

    #[test]
    fn test_lesson_numbers_are_sequential() {
        for section in catalog() {
            for (i, lesson) in section.lessons.iter().enumerate() {
                assert_eq!(lesson.id, LessonId::new(section.id, i as u16 + 1));
            }
        }
    }

    #[test]
    fn test_find_lesson() {
        let lesson = find_lesson(LessonId::new(SectionId::Verbs, 2)).unwrap();
        assert_eq!(lesson.title.en, "Present tense");
        assert!(find_lesson(LessonId::new(SectionId::Verbs, 99)).is_none());
    }

    #[test]
    fn test_all_diagrams_parse() {
        for section in catalog() {
            for lesson in &section.lessons {
                for block in &lesson.blocks {
                    if let Block::Diagram { outline, .. } = block {
                        assert!(Diagram::from_outline(outline.as_slice()).is_ok(), "{:?}", lesson.id);
                    }
                }
            }
        }
    }

    #[test]
    fn test_table_rows_match_headers() {
        for section in catalog() {
            for lesson in &section.lessons {
                for block in &lesson.blocks {
                    if let Block::Table { headers, rows, .. } = block {
                        for row in rows {
                            assert_eq!(row.len(), headers.len(), "{:?}", lesson.id);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_fixed_palettes() {
        assert_eq!(SectionId::Verbs.fixed_palette(), Some(FixedSection::Verbs));
        assert_eq!(SectionId::Alphabet.fixed_palette(), None);
    }
}

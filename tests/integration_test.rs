use anyhow::Result;
use qawaid::content::{self, Block, Diagram};
use qawaid::preferences::STORAGE_KEY;
use qawaid::{
    resolve, AppConfig, FixedSection, JsonFileStorage, KeyValueStorage, LessonId, Navigator, PreferenceStore,
    ScreenId, SectionId, SplashTimer, ThemeVariant,
};
use std::fs;
use std::time::{Duration, Instant};

fn store_in(dir: &std::path::Path) -> PreferenceStore {
    let mut store = PreferenceStore::new(Box::new(JsonFileStorage::new(dir)));
    store.load();
    store
}

#[test]
fn test_preferences_survive_restart() -> Result<()> {
    let dir = tempfile::tempdir()?;

    {
        let mut store = store_in(dir.path());
        assert!(store.is_loaded());
        assert_eq!(store.theme_variant(), ThemeVariant::Teal);
        assert!(!store.is_dark_mode());

        store.toggle_dark_mode();
        store.set_theme_variant(ThemeVariant::CrimsonNight)?;
    }

    let store = store_in(dir.path());
    assert!(store.is_dark_mode());
    assert_eq!(store.theme_variant(), ThemeVariant::CrimsonNight);
    assert_eq!(store.palette(), resolve(ThemeVariant::CrimsonNight, true));

    let on_disk: serde_json::Value = serde_json::from_str(&fs::read_to_string(
        dir.path().join(format!("{STORAGE_KEY}.json")),
    )?)?;
    assert_eq!(on_disk["themeVariant"], "crimsonNight");
    assert_eq!(on_disk["isDarkMode"], true);
    assert_eq!(on_disk["version"], 1);
    Ok(())
}

#[test]
fn test_toggle_before_load_keeps_stored_variant() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut storage = JsonFileStorage::new(dir.path());
    storage.set_string(STORAGE_KEY, r#"{"isDarkMode":false,"themeVariant":"green","version":1}"#.to_string())?;

    // Background read completes, but the UI toggles before the result is applied
    let raw = storage.get_string(STORAGE_KEY);
    let mut store = PreferenceStore::new(Box::new(storage.clone()));
    store.toggle_dark_mode();
    store.apply_loaded(raw);

    assert!(store.is_dark_mode());
    assert_eq!(store.theme_variant(), ThemeVariant::Green);

    let reloaded = store_in(dir.path());
    assert_eq!(reloaded.state(), store.state());
    Ok(())
}

#[test]
fn test_legacy_record_is_migrated() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut storage = JsonFileStorage::new(dir.path());
    storage.set_string(STORAGE_KEY, r#"{"isDarkMode":true,"themeVariant":"blackwhite"}"#.to_string())?;

    let store = store_in(dir.path());
    assert!(store.is_dark_mode());
    assert_eq!(store.theme_variant(), ThemeVariant::Teal);
    Ok(())
}

#[test]
fn test_corrupt_record_falls_back_to_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join(format!("{STORAGE_KEY}.json")), "{ not json")?;

    let mut store = store_in(dir.path());
    assert!(store.is_loaded());
    assert_eq!(store.state(), Default::default());

    // The next change replaces the corrupt record
    store.set_theme_variant(ThemeVariant::Green)?;
    assert_eq!(store_in(dir.path()).theme_variant(), ThemeVariant::Green);
    Ok(())
}

#[test]
fn test_internal_variant_is_rejected_and_not_written() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = store_in(dir.path());

    assert!(store.set_theme_variant(ThemeVariant::Verbs).is_err());
    assert_eq!(store.theme_variant(), ThemeVariant::Teal);
    assert!(!dir.path().join(format!("{STORAGE_KEY}.json")).exists());
    Ok(())
}

#[test]
fn test_splash_home_lesson_and_back() {
    let t0 = Instant::now();
    let config = AppConfig::default();
    let mut nav = Navigator::new();
    let mut timer = SplashTimer::start(config.splash_delay, t0);

    assert!(!timer.poll(t0 + Duration::from_millis(500)));
    assert!(timer.poll(t0 + config.splash_delay));
    nav.navigate(ScreenId::Home);

    let lesson = content::find_section(SectionId::Verbs)
        .and_then(|s| s.lessons.first())
        .map(|l| l.id)
        .expect("verbs section has lessons");
    nav.navigate(ScreenId::Section(SectionId::Verbs));
    nav.navigate(ScreenId::Lesson(lesson));
    assert_eq!(nav.depth(), 4);

    assert!(nav.go_back());
    assert_eq!(nav.current(), ScreenId::Section(SectionId::Verbs));
    assert!(nav.go_back());
    assert_eq!(nav.current(), ScreenId::Home);
}

#[test]
fn test_every_variant_resolves_in_both_modes() {
    for variant in ThemeVariant::ALL {
        let light = resolve(variant, false);
        let dark = resolve(variant, true);
        assert_ne!(light.background, dark.background, "{variant}");
        assert_ne!(light.text, dark.text, "{variant}");
    }
    for section in FixedSection::ALL {
        assert_eq!(qawaid::resolve_fixed(section, true), resolve(section.variant(), true));
    }
}

#[test]
fn test_catalog_is_consistent() -> Result<()> {
    for section_id in SectionId::ALL {
        let section = content::find_section(section_id).expect("every section is in the catalog");
        assert!(!section.lessons.is_empty(), "{section_id:?} has no lessons");

        for lesson in &section.lessons {
            assert_eq!(lesson.id.section, section_id);
            assert_eq!(content::find_lesson(lesson.id).map(|l| l.id), Some(lesson.id));

            for block in &lesson.blocks {
                match block {
                    Block::Table { headers, rows, .. } => {
                        assert!(rows.iter().all(|r| r.len() == headers.len()), "{:?}", lesson.id);
                    }
                    Block::Diagram { outline, .. } => {
                        Diagram::from_outline(outline.as_slice())?;
                    }
                    Block::Paragraph(_) => {}
                }
            }
        }
    }

    assert!(content::find_lesson(LessonId::new(SectionId::Alphabet, 999)).is_none());
    Ok(())
}

#[test]
fn test_word_frequency_coverage() {
    let table = content::quran_word_frequency();
    let rows = table.cumulative();
    let last = rows.last().expect("table has rows");
    assert!((last.cumulative_percent - table.coverage_percent()).abs() < 1e-9);
}

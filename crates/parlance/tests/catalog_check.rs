//! Tests for catalog checks.

use std::collections::{BTreeMap, HashMap};

use parlance::{CatalogWarning, Locale, LocaleCatalog, MemorySource, PluralForm, Translation};

fn plural(plural_id: &str, string: &str, variants: &[(PluralForm, &str)]) -> Translation {
    Translation::builder()
        .id(plural_id)
        .string(string)
        .plural_id(plural_id.to_string())
        .plurals(
            variants
                .iter()
                .map(|(form, text)| (*form, (*text).to_string()))
                .collect::<BTreeMap<_, _>>(),
        )
        .build()
}

fn checked(tag: &str, catalog: LocaleCatalog) -> Vec<CatalogWarning> {
    let locale = Locale::new(tag).unwrap();
    locale
        .load(&MemorySource::new().with_catalog(catalog))
        .unwrap();
    locale.check_catalog()
}

fn render(warnings: &[CatalogWarning]) -> String {
    warnings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// =========================================================================
// Clean Catalogs
// =========================================================================

#[test]
fn plain_entries_have_no_warnings() {
    let catalog = LocaleCatalog::from_translations(
        "en",
        [
            Translation::builder().id("hello").string("Hello").build(),
            Translation::builder().id("bye").string("Bye %(name)s").build(),
        ],
    );
    assert!(checked("en", catalog).is_empty());
}

#[test]
fn russian_plural_entry_is_clean() {
    let files = plural(
        "%d files",
        "%d файлов",
        &[
            (PluralForm::One, "%d файл"),
            (PluralForm::Few, "%d файла"),
            (PluralForm::Many, "%d файлов"),
            (PluralForm::Other, "%d файла"),
        ],
    );
    assert!(checked("ru", LocaleCatalog::from_translations("ru", [files])).is_empty());
}

// =========================================================================
// Problems
// =========================================================================

#[test]
fn few_form_is_unused_in_english() {
    let files = plural(
        "%d files",
        "%d file",
        &[
            (PluralForm::One, "%d file"),
            (PluralForm::Few, "%d files"),
            (PluralForm::Other, "%d files"),
        ],
    );
    let warnings = checked("en", LocaleCatalog::from_translations("en", [files]));
    assert_eq!(
        warnings,
        vec![CatalogWarning::UnusedPluralForm {
            key: "%d files".to_string(),
            form: PluralForm::Few,
        }]
    );
}

#[test]
fn mixed_problems_are_reported_in_key_order() {
    let translations = HashMap::from([
        (
            "%d files".to_string(),
            plural(
                "%d files",
                "%(dir)s: %d file",
                &[
                    (PluralForm::One, "%(dir)s: %d file"),
                    (PluralForm::Few, "%d files"),
                    (PluralForm::Other, "%(folder)s: %d files"),
                ],
            ),
        ),
        (
            "a".to_string(),
            Translation::builder()
                .id("a")
                .plurals(BTreeMap::from([(PluralForm::One, "x".to_string())]))
                .build(),
        ),
        (
            "b".to_string(),
            Translation::builder().id("c").string("hi").build(),
        ),
    ]);
    let catalog = LocaleCatalog {
        tag: "en".to_string(),
        translations,
    };

    insta::assert_snapshot!(render(&checked("en", catalog)), @r#"
    '%d files': variant 'few' is never selected by this locale
    '%d files': variant 'few' uses placeholders [], default string uses ["dir"]
    '%d files': variant 'other' uses placeholders ["folder"], default string uses ["dir"]
    'a': has plural variants but no plural_id
    'a': no 'other' variant
    'b': stored under the wrong key, expected 'c'
    "#);
}

#[test]
fn warnings_serialize_with_kind_tag() {
    let warning = CatalogWarning::MissingOtherForm {
        key: "a".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&warning).unwrap(),
        r#"{"kind":"missing_other_form","key":"a"}"#
    );
}

#[test]
fn warning_key_and_kind() {
    let warning = CatalogWarning::UnusedPluralForm {
        key: "%d files".to_string(),
        form: PluralForm::Few,
    };
    assert_eq!(warning.key(), "%d files");
    assert_eq!(warning.kind(), "unused_plural_form");
}

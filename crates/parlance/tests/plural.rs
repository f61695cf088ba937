//! Tests for CLDR plural classification.

use parlance::facilities::{PluralClassifier, parse_operands};
use parlance::{LanguageTag, PluralForm};

fn classifier(tag: &str) -> PluralClassifier {
    let tag: LanguageTag = tag.parse().unwrap();
    PluralClassifier::try_new(&tag).unwrap()
}

// =========================================================================
// Classification
// =========================================================================

#[test]
fn english_one_and_other() {
    let en = classifier("en");
    assert_eq!(en.classify(1), PluralForm::One);
    assert_eq!(en.classify(0), PluralForm::Other);
    assert_eq!(en.classify(2), PluralForm::Other);
    assert_eq!(en.classify(101), PluralForm::Other);
}

#[test]
fn russian_one_few_many() {
    let ru = classifier("ru");
    assert_eq!(ru.classify(1), PluralForm::One);
    assert_eq!(ru.classify(21), PluralForm::One);
    assert_eq!(ru.classify(3), PluralForm::Few);
    assert_eq!(ru.classify(24), PluralForm::Few);
    assert_eq!(ru.classify(5), PluralForm::Many);
    assert_eq!(ru.classify(11), PluralForm::Many);
    assert_eq!(ru.classify(12), PluralForm::Many);
}

#[test]
fn arabic_uses_every_category() {
    let ar = classifier("ar");
    assert_eq!(ar.classify(0), PluralForm::Zero);
    assert_eq!(ar.classify(1), PluralForm::One);
    assert_eq!(ar.classify(2), PluralForm::Two);
    assert_eq!(ar.classify(3), PluralForm::Few);
    assert_eq!(ar.classify(11), PluralForm::Many);
    assert_eq!(ar.classify(100), PluralForm::Other);
}

#[test]
fn japanese_has_only_other() {
    let ja = classifier("ja");
    assert_eq!(ja.classify(1), PluralForm::Other);
    assert_eq!(ja.forms(), vec![PluralForm::Other]);
}

#[test]
fn visible_fraction_digits_change_the_category() {
    let en = classifier("en");
    assert_eq!(en.classify(parse_operands("1").unwrap()), PluralForm::One);
    assert_eq!(en.classify(parse_operands("1.0").unwrap()), PluralForm::Other);
}

#[test]
fn malformed_decimal_has_no_operands() {
    assert!(parse_operands("1.2.3").is_none());
    assert!(parse_operands("").is_none());
}

// =========================================================================
// Available Forms
// =========================================================================

#[test]
fn forms_are_listed_in_cldr_order() {
    assert_eq!(
        classifier("ru").forms(),
        vec![
            PluralForm::One,
            PluralForm::Few,
            PluralForm::Many,
            PluralForm::Other
        ]
    );
    assert_eq!(classifier("ar").forms(), PluralForm::ALL.to_vec());
}

// =========================================================================
// Plural Form Names
// =========================================================================

#[test]
fn plural_form_names_round_trip() {
    for form in PluralForm::ALL {
        assert_eq!(form.as_str().parse::<PluralForm>().unwrap(), form);
    }
}

#[test]
fn unknown_plural_form_name_is_an_error() {
    let err = "several".parse::<PluralForm>().unwrap_err();
    assert_eq!(err.to_string(), "unknown plural category 'several'");
}

use cleanbook_core::{normalize_email, normalize_phone, Normalized, REASON_OK};
use proptest::prelude::*;

fn assert_consistent(result: &Normalized) {
    assert_eq!(result.is_valid, result.reason == REASON_OK, "{result:?}");
    assert_eq!(result.is_valid, !result.value.is_empty(), "{result:?}");
}

proptest! {
    #[test]
    fn phone_result_is_consistent(raw in "\\PC{0,40}", region in "(US|ca|GB|INTL|)") {
        assert_consistent(&normalize_phone(&raw, &region));
    }

    #[test]
    fn email_result_is_consistent(raw in "\\PC{0,40}") {
        assert_consistent(&normalize_email(&raw));
    }

    #[test]
    fn phone_digits_noise_is_consistent(raw in "[0-9 ()+.x-]{0,30}") {
        assert_consistent(&normalize_phone(&raw, "US"));
    }

    #[test]
    fn phone_is_idempotent(raw in "[0-9 ()+.-]{0,24}", region in "(US|CA|INTL)") {
        let first = normalize_phone(&raw, &region);
        if first.is_valid {
            prop_assert_eq!(normalize_phone(&first.value, &region), first);
        }
    }

    #[test]
    fn email_is_idempotent(
        local in "[a-z0-9._]{1,12}",
        host in "[a-z0-9]{1,10}",
        tld in "(com|org|net|io|con|ogr|)",
        sep in "(@|@@| @ | at |\\(at\\))",
    ) {
        let raw = if tld.is_empty() {
            format!("{local}{sep}{host}")
        } else {
            format!("{local}{sep}{host}.{tld}")
        };
        let first = normalize_email(&raw);
        if first.is_valid {
            prop_assert_eq!(normalize_email(&first.value), first);
        }
    }

    #[test]
    fn noisy_email_is_idempotent(raw in "[a-z0-9 .,;@()\\[\\]{}-]{1,30}") {
        let first = normalize_email(&raw);
        if first.is_valid {
            prop_assert_eq!(normalize_email(&first.value), first);
        }
    }
}

#[test]
fn separator_words_in_dotless_domain_settle() {
    for raw in ["user@atcom", "user@dotcom", "bob@x-atcom", "user@gmailatcom"] {
        let first = normalize_email(raw);
        assert_consistent(&first);
        if first.is_valid {
            assert_eq!(normalize_email(&first.value), first, "{raw}");
        }
    }
    assert_eq!(normalize_email("user@atcom").as_tuple(), ("", false, "invalid pattern"));
    assert_eq!(normalize_email("user@dotcom").as_tuple(), ("", false, "invalid pattern"));
}

#[test]
fn documented_examples_hold() {
    assert_eq!(normalize_phone("", "US").as_tuple(), ("", false, "empty"));
    assert_eq!(
        normalize_phone("(555) 123-4567", "US").as_tuple(),
        ("+15551234567", true, "ok")
    );
    assert_eq!(
        normalize_phone("011 44 20 7946 0958", "US").as_tuple(),
        ("+011442079460958", true, "ok")
    );
    assert_eq!(
        normalize_email("JOHN (at) GMAIL (dot) COM").as_tuple(),
        ("john@gmail.com", true, "ok")
    );
    assert_eq!(
        normalize_email("jane.doe@example.con").as_tuple(),
        ("jane.doe@example.com", true, "ok")
    );
    assert_eq!(
        normalize_email("nodomain").as_tuple(),
        ("", false, "missing @")
    );
    assert_eq!(normalize_email("a@@b.com").as_tuple(), ("a@b.com", true, "ok"));
}

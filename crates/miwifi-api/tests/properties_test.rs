#![allow(clippy::unwrap_used, clippy::float_cmp)]
// Property tests for the scalar, enum, and sentinel layers.

use proptest::prelude::*;
use serde_json::{Map, Value, json};

use miwifi_api::scalar::int_flag;
use miwifi_api::sentinel::{SENTINEL, normalize};
use miwifi_api::{
    ByteCount, ConnectionStatus, ErrorKind, FieldPath, FromRaw, Uptime, VpnProto, WifiEncryption,
};

// ── Strategies ──────────────────────────────────────────────────────

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!(SENTINEL)),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z ]{0,6}".prop_map(Value::from),
    ]
}

fn raw_value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn raw_map() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,6}", raw_value(), 0..8)
        .prop_map(|m| m.into_iter().collect())
}

fn path() -> FieldPath {
    FieldPath::root("prop").key("field")
}

// ── Sentinel ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalization_is_idempotent(map in raw_map()) {
        let once = normalize(&map).into_owned();
        let twice = normalize(&once);
        prop_assert_eq!(&*twice, &once);
    }

    #[test]
    fn normalization_only_rewrites_top_level_sentinels(map in raw_map()) {
        let normalized = normalize(&map);
        prop_assert_eq!(normalized.len(), map.len());
        for (key, original) in &map {
            let value = &normalized[key];
            if original == &json!(SENTINEL) {
                prop_assert_eq!(value, &Value::Null);
            } else {
                prop_assert_eq!(value, original);
            }
        }
    }
}

// ── ByteCount ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn byte_count_string_and_integer_agree(n in any::<u64>()) {
        let from_int = ByteCount::from_raw(&json!(n), &path()).unwrap();
        let from_str = ByteCount::from_raw(&json!(n.to_string()), &path()).unwrap();
        prop_assert_eq!(from_int, from_str);
        prop_assert_eq!(from_int.bytes(), n);
    }

    #[test]
    fn whole_kibibytes_are_exact(k in any::<u32>()) {
        let count = ByteCount::new(u64::from(k) * 1024);
        prop_assert_eq!(count.kilobytes(), f64::from(k));
    }

    #[test]
    fn negative_byte_counts_are_rejected(n in i64::MIN..0) {
        let err = ByteCount::from_raw(&json!(n), &path()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidScalar);
    }
}

// ── Closed enumerations ─────────────────────────────────────────────

proptest! {
    #[test]
    fn codes_outside_the_set_are_rejected(code in any::<i64>().prop_filter("unassigned", |c| !(0..=4).contains(c))) {
        let err = ConnectionStatus::from_raw(&json!(code), &path()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
    }

    #[test]
    fn tags_outside_the_set_are_rejected(tag in "[a-zA-Z0-9-]{0,10}") {
        prop_assume!(tag != "l2tp" && tag != "pptp");
        let err = VpnProto::from_raw(&json!(tag), &path()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
    }

    #[test]
    fn encryption_tags_are_case_sensitive(tag in "(psk2|mixed-psk)", upper in any::<bool>()) {
        let raw = if upper { tag.to_uppercase() } else { tag.clone() };
        let result = WifiEncryption::from_raw(&json!(raw), &path());
        prop_assert_eq!(result.is_ok(), !upper);
    }
}

// ── Field coercions ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn int_flag_accepts_quoted_integers(n in any::<i64>()) {
        prop_assert_eq!(int_flag(&json!(n.to_string()), &path()).unwrap(), n);
        prop_assert_eq!(int_flag(&json!(n), &path()).unwrap(), n);
    }

    #[test]
    fn uptime_clock_strings(days in 0u32..1000, h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let clock = format!("{days} days, {h}:{m:02}:{s:02}");
        let uptime = Uptime::from_raw(&json!(clock), &path()).unwrap();
        let expected = f64::from(days) * 86_400.0 + f64::from(h) * 3_600.0 + f64::from(m) * 60.0 + f64::from(s);
        prop_assert_eq!(uptime.as_secs_f64(), expected);
    }
}

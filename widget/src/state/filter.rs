use leptos::*;
use log::warn;

use crate::filter::utils::{parse_key_strict, RangeSelection};
use crate::utils::dom::local_storage;

const STORAGE_KEY: &str = "kikan.range";

/// Committed range as seen by the rest of the page. The filter component
/// owns its own draft; this context only ever holds committed values.
pub fn use_range_filter() -> (ReadSignal<RangeSelection>, WriteSignal<RangeSelection>) {
    match use_context::<(ReadSignal<RangeSelection>, WriteSignal<RangeSelection>)>() {
        Some(ctx) => ctx,
        None => {
            let (read, write) = create_signal(RangeSelection::default());
            provide_context((read, write));
            (read, write)
        }
    }
}

pub fn persist_range(range: &RangeSelection) {
    let storage = match local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            warn!("期間を保存できません: {err}");
            return;
        }
    };
    match serde_json::to_string(range) {
        Ok(json) => {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                warn!("期間を localStorage に書き込めませんでした。");
            }
        }
        Err(err) => warn!("期間をシリアライズできません: {err}"),
    }
}

pub fn restore_range() -> Option<RangeSelection> {
    let storage = local_storage().ok()?;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str::<RangeSelection>(&raw) {
        Ok(range) => Some(sanitize(range)),
        Err(err) => {
            warn!("保存された期間を読み込めません: {err}");
            None
        }
    }
}

fn sanitize(range: RangeSelection) -> RangeSelection {
    RangeSelection {
        from: sanitize_key(range.from),
        to: sanitize_key(range.to),
    }
}

fn sanitize_key(key: Option<String>) -> Option<String> {
    let key = key?;
    match parse_key_strict(&key) {
        Ok(_) => Some(key),
        Err(err) => {
            warn!("保存された日付キーを破棄します: {err}");
            None
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn persisted_range_round_trips() {
        let range = RangeSelection {
            from: Some("2025-06-03".into()),
            to: Some("2025-06-10".into()),
        };
        persist_range(&range);
        assert_eq!(restore_range(), Some(range));
    }

    #[wasm_bindgen_test]
    fn corrupted_entry_restores_as_nothing() {
        let storage = local_storage().unwrap();
        storage.set_item(STORAGE_KEY, "not json").unwrap();
        assert_eq!(restore_range(), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn context_is_created_once_and_shared() {
        with_runtime(|| {
            let (read, write) = use_range_filter();
            assert_eq!(read.get_untracked(), RangeSelection::default());

            write.set(RangeSelection {
                from: Some("2025-06-03".into()),
                to: None,
            });
            let (read_again, _) = use_range_filter();
            assert_eq!(
                read_again.get_untracked().from.as_deref(),
                Some("2025-06-03")
            );
        });
    }

    #[test]
    fn sanitize_drops_only_malformed_endpoints() {
        let range = RangeSelection {
            from: Some("2025-06-03".into()),
            to: Some("junk".into()),
        };
        let cleaned = sanitize(range);
        assert_eq!(cleaned.from.as_deref(), Some("2025-06-03"));
        assert_eq!(cleaned.to, None);
    }

    #[test]
    fn stored_payload_shape_is_stable() {
        let range = RangeSelection {
            from: Some("2025-06-03".into()),
            to: Some("2025-06-10".into()),
        };
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"from":"2025-06-03","to":"2025-06-10"}"#);
        let back: RangeSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}

use hints_meta::{ButtonKind, ButtonPositionHint, parse_overrides};
use proptest::prelude::*;
use serde_json::json;

fn button_kind() -> impl Strategy<Value = ButtonKind> {
    prop::sample::select(ButtonKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn declared_button_hint_is_read_back(
        kind in button_kind(),
        horizontal in any::<i32>(),
        top in any::<i32>(),
        bottom in any::<i32>(),
        hide in any::<bool>(),
    ) {
        let document = json!({
            "com.example.Screen": {
                "buttonHints": {
                    (kind.as_str()): {"horizontalOffset": horizontal, "top": top, "bottom": bottom, "hide": hide}
                }
            }
        });
        let bytes = serde_json::to_vec(&document).unwrap();

        let configs = parse_overrides(&bytes, "generated.json").unwrap();

        prop_assert_eq!(
            configs["com.example.Screen"].button_hint(kind),
            Some(&ButtonPositionHint::new(horizontal, top, bottom, hide))
        );
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = parse_overrides(&bytes, "fuzz.json");
    }
}

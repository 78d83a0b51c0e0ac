//! Property tests for the text edit engine and the state registry.

use ply_kit::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Char(u32),
    Key(Key, Modifiers),
}

fn key_strategy() -> impl Strategy<Value = Key> {
    (1u32..=8).prop_map(|code| Key::from_code(code).unwrap())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u32..0x90).prop_map(Op::Char),
        1 => prop::sample::select(vec![' ' as u32, 'a' as u32, 'Z' as u32]).prop_map(Op::Char),
        4 => (key_strategy(), 0u32..8)
            .prop_map(|(key, mods)| Op::Key(key, Modifiers::from_bits_truncate(mods))),
    ]
}

fn snapshot(s: &InputState<'_>) -> (Vec<u8>, usize, usize) {
    (s.text().to_vec(), s.cursor(), s.select_start())
}

fn assert_invariants(s: &InputState<'_>) {
    assert!(s.len() <= s.max_len());
    assert!(s.cursor() <= s.len());
    assert!(s.select_start() <= s.len());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_and_refusals_do_not_mutate(
        cap in 1usize..12,
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut buf = vec![0u8; cap];
        let mut s = InputState::new(&mut buf);
        for op in ops {
            let before = snapshot(&s);
            let changed = match op {
                Op::Char(c) => s.handle_char(c),
                Op::Key(key, mods) => s.handle_key(key, mods),
            };
            assert_invariants(&s);
            if changed {
                prop_assert_ne!(snapshot(&s), before);
            } else {
                prop_assert_eq!(snapshot(&s), before);
            }
        }
    }

    #[test]
    fn typing_replaces_selection(
        text in "[ -~]{1,20}",
        a in 0usize..=20,
        b in 0usize..=20,
        c in 0x20u32..0x7F,
    ) {
        let mut buf = [0u8; 32];
        let mut s = InputState::new(&mut buf);
        s.set_text(text.as_bytes());
        let len = s.len();
        let (a, b) = (a.min(len), b.min(len));
        prop_assume!(a != b);
        s.set_selection(a, b);
        let (lo, hi) = (a.min(b), a.max(b));

        let mut expected = text.as_bytes()[..lo].to_vec();
        expected.push(c as u8);
        expected.extend_from_slice(&text.as_bytes()[hi..]);

        prop_assert!(s.handle_char(c));
        prop_assert_eq!(s.text(), &expected[..]);
        prop_assert_eq!(s.len(), len - (hi - lo) + 1);
        prop_assert_eq!(s.cursor(), lo + 1);
        prop_assert!(!s.has_selection());
    }

    #[test]
    fn word_jumps_land_on_word_starts(text in "[a-c ]{0,24}", pos in 0usize..=24) {
        let bytes = text.as_bytes();
        let pos = pos.min(bytes.len());
        let left = ply_kit::text_input::find_word_boundary_left(bytes, pos);
        let right = ply_kit::text_input::find_word_boundary_right(bytes, pos);
        prop_assert!(left <= pos && pos <= right);
        prop_assert!(left == 0 || (bytes[left - 1] == b' ' && bytes[left] != b' '));
        prop_assert!(right == bytes.len() || (bytes[right - 1] == b' ' && bytes[right] != b' '));
    }

    #[test]
    fn get_or_create_is_idempotent_and_bounded(
        cap in 0usize..8,
        ids in prop::collection::vec(1u32..16, 0..32),
    ) {
        let mut slots = vec![State::default(); cap];
        let mut reg = StateRegistry::new(&mut slots);
        let mut distinct: Vec<u32> = Vec::new();
        for id in ids {
            let created = reg.get_or_create(id).is_some();
            if !distinct.contains(&id) && distinct.len() < cap {
                distinct.push(id);
            }
            prop_assert_eq!(created, distinct.contains(&id));
            prop_assert_eq!(reg.len(), distinct.len());
        }
        let stored: Vec<u32> = reg.iter().map(|s| s.id).collect();
        prop_assert_eq!(stored, distinct);
    }
}

#[test]
fn hello_world_test_word_jumps() {
    let mut buf = [0u8; 32];
    let mut s = InputState::new(&mut buf);
    s.set_text(b"Hello World Test");
    assert_eq!(s.len(), 16);

    assert!(s.handle_key(Key::Left, Modifiers::CTRL));
    assert_eq!(s.cursor(), 12);
    assert!(s.handle_key(Key::Left, Modifiers::CTRL));
    assert_eq!(s.cursor(), 6);

    s.set_cursor(0);
    assert!(s.handle_key(Key::Right, Modifiers::CTRL));
    assert_eq!(s.cursor(), 6);
    assert!(s.handle_key(Key::Right, Modifiers::CTRL));
    assert_eq!(s.cursor(), 12);
}

#[test]
fn indexed_registry_follows_the_same_contract() {
    let mut linear_slots = [State::default(); 4];
    let mut indexed_slots = [State::default(); 4];
    let mut linear = StateRegistry::new(&mut linear_slots);
    let mut indexed = IndexedRegistry::new(&mut indexed_slots);
    for id in [5, 9, 5, 1, 2, 9, 3, 4] {
        let a = linear.get_or_create(id).map(|s| s.id);
        let b = indexed.get_or_create(id).map(|s| s.id);
        assert_eq!(a, b);
    }
    assert_eq!(linear.len(), indexed.len());
    assert!(linear.iter().eq(indexed.iter()));
}

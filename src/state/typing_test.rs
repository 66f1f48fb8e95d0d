use super::*;

fn cycle(phrases: &[&str]) -> PhraseCycle {
    PhraseCycle::new(phrases.iter().map(|p| (*p).to_owned()).collect(), TypingTiming::default())
}

fn texts(cycle: &mut PhraseCycle, ticks: usize) -> Vec<String> {
    (0..ticks).map(|_| cycle.tick().text).collect()
}

#[test]
fn starts_empty_in_typing_phase() {
    let c = cycle(&["Hi"]);
    assert_eq!(c.visible_text(), "");
    assert_eq!(c.phase(), TypingPhase::Typing);
    assert_eq!(c.phrase_index(), 0);
}

#[test]
fn full_cycle_types_deletes_and_wraps() {
    let mut c = cycle(&["ab", "c", "de"]);
    let seen = texts(&mut c, 14);
    let expected = [
        "a", "ab", "a", "", // phrase 0
        "c", "",            // phrase 1
        "d", "de", "d", "", // phrase 2
        "a", "ab", "a", "", // wrapped to phrase 0
    ];
    assert_eq!(seen, expected);
    assert_eq!(c.phrase_index(), 0);
}

#[test]
fn delays_follow_phase_rhythm() {
    let mut c = cycle(&["ab"]);
    let timing = TypingTiming::default();
    assert_eq!(c.tick().delay, timing.type_delay());
    let full = c.tick();
    assert_eq!(full.delay, timing.hold_full());
    assert_eq!(c.phase(), TypingPhase::PausingFull);
    assert_eq!(c.tick().delay, timing.delete_delay());
    let empty = c.tick();
    assert_eq!(empty.text, "");
    assert_eq!(empty.delay, timing.hold_empty());
    assert_eq!(c.phase(), TypingPhase::PausingEmpty);
}

#[test]
fn char_index_never_exceeds_phrase_length() {
    let mut c = cycle(&["abc", "", "xy"]);
    for _ in 0..200 {
        c.tick();
        assert!(c.char_index() <= c.current_phrase().chars().count());
        assert!(c.phrase_index() < 3);
    }
}

#[test]
fn empty_phrase_pauses_without_invalid_index() {
    let mut c = cycle(&["", "a"]);
    let first = c.tick();
    assert_eq!(first.text, "");
    assert_eq!(c.phase(), TypingPhase::PausingFull);
    let second = c.tick();
    assert_eq!(second.text, "");
    assert_eq!(c.phase(), TypingPhase::PausingEmpty);
    assert_eq!(c.tick().text, "a");
    assert_eq!(c.phrase_index(), 1);
}

#[test]
fn empty_phrase_list_keeps_ticking() {
    let mut c = cycle(&[]);
    for _ in 0..10 {
        assert_eq!(c.tick().text, "");
        assert_eq!(c.phrase_index(), 0);
    }
}

#[test]
fn multibyte_phrases_split_on_char_boundaries() {
    let mut c = cycle(&["né☀"]);
    assert_eq!(texts(&mut c, 6), ["n", "né", "né☀", "né", "n", ""]);
}

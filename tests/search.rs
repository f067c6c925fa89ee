use strview::search::{find, rfind};

/// Each entry is `(needle, haystack, expected_fwd, expected_rev)`.
type SearchTest = (&'static [u8], &'static [u8], Option<usize>, Option<usize>);

const SEARCH_TESTS: &[SearchTest] = &[
    (b"", b"", Some(0), Some(0)),
    (b"", b"a", Some(0), Some(1)),
    (b"", b"abc", Some(0), Some(3)),
    (b"a", b"", None, None),
    (b"a", b"a", Some(0), Some(0)),
    (b"a", b"aa", Some(0), Some(1)),
    (b"a", b"ba", Some(1), Some(1)),
    (b"a", b"bba", Some(2), Some(2)),
    (b"a", b"bbbab", Some(3), Some(3)),
    (b"a", b"bbbbbb", None, None),
    (b"ab", b"", None, None),
    (b"ab", b"a", None, None),
    (b"ab", b"b", None, None),
    (b"ab", b"ab", Some(0), Some(0)),
    (b"ab", b"aab", Some(1), Some(1)),
    (b"ab", b"aaab", Some(2), Some(2)),
    (b"ab", b"abaab", Some(0), Some(3)),
    (b"ab", b"baaab", Some(3), Some(3)),
    (b"ab", b"acb", None, None),
    (b"ab", b"abba", Some(0), Some(0)),
    (b"abc", b"ab", None, None),
    (b"abc", b"abc", Some(0), Some(0)),
    (b"abc", b"abcz", Some(0), Some(0)),
    (b"abc", b"zabc", Some(1), Some(1)),
    (b"abc", b"zzabc", Some(2), Some(2)),
    (b"abc", b"azbc", None, None),
    (b"abc", b"abcabc", Some(0), Some(3)),
    (b"abcd", b"abcd", Some(0), Some(0)),
    (b"abcd", b"zzabcd", Some(2), Some(2)),
    (b"abcd", b"abczabcd", Some(4), Some(4)),
    (b"abcd", b"abcdabcd", Some(0), Some(4)),
    (b"abcd", b"abczabcz", None, None),
    (b"abczdef", b"abczdefzzzzzzzzzzzzzzzzzzzz", Some(0), Some(0)),
    (b"abczdef", b"zzzzzzzzzzzzzzzzzzzzabczdef", Some(20), Some(20)),
    (b"xyz", b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaxyz", Some(32), Some(32)),
    // Failure shapes once caught by quickcheck in similar engines.
    (b"\x00\x15", b"\x00\x15\x15\x00", Some(0), Some(0)),
    (b"\x00\x1e", b"\x1e\x00", None, None),
];

#[test]
fn forward() {
    for &(needle, hay, expected, _) in SEARCH_TESTS {
        assert_eq!(
            find(hay, needle),
            expected,
            "find(hay: {:?}, needle: {:?})",
            hay,
            needle
        );
    }
}

#[test]
fn reverse() {
    for &(needle, hay, _, expected) in SEARCH_TESTS {
        assert_eq!(
            rfind(hay, needle),
            expected,
            "rfind(hay: {:?}, needle: {:?})",
            hay,
            needle
        );
    }
}

#[test]
fn scenario_offsets() {
    assert_eq!(find(b"hello world", b"world"), Some(6));
    assert_eq!(find(b"hello world", b"xyz"), None);
    assert_eq!(find(b"aaaa", b""), Some(0));
    assert_eq!(rfind(b"abababab", b"ab"), Some(6));
    assert_eq!(rfind(b"abc", b"abcd"), None);
}

#[test]
fn pathological_periodic_inputs() {
    // Worst-case shapes for naive search; two-way must still answer.
    assert_eq!(find(b"aaaaaaaaaaaaab", b"aaaaab"), Some(8));
    let hay = [b"a".repeat(200), b"b".to_vec()].concat();
    let needle = [b"a".repeat(50), b"b".to_vec()].concat();
    assert_eq!(find(&hay, &needle), Some(150));
    assert_eq!(rfind(&hay, &needle), Some(150));
    assert_eq!(find(&b"a".repeat(200), &needle), None);
    assert_eq!(rfind(&b"a".repeat(200), &needle), None);

    let hay = b"abab".repeat(64);
    assert_eq!(find(&hay, b"ababababab"), Some(0));
    assert_eq!(rfind(&hay, b"ababababab"), Some(246));
}

#[test]
fn every_dispatch_width() {
    let hay = b"the quick brown fox jumps over the lazy dog";
    assert_eq!(find(hay, b"q"), Some(4));
    assert_eq!(find(hay, b"th"), Some(0));
    assert_eq!(find(hay, b"the"), Some(0));
    assert_eq!(find(hay, b"lazy"), Some(35));
    assert_eq!(find(hay, b"jumps"), Some(20));
    assert_eq!(rfind(hay, b"o"), Some(41));
    assert_eq!(rfind(hay, b"th"), Some(31));
    assert_eq!(rfind(hay, b"the"), Some(31));
    assert_eq!(rfind(hay, b"over"), Some(26));
    assert_eq!(rfind(hay, b"jumps"), Some(20));
}

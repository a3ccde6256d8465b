use setcalc::{SetOp, SmallSet, UNIVERSE_SIZE, set};

#[test]
fn test_new() {
    let s = SmallSet::new();
    assert_eq!(SmallSet::universe(), UNIVERSE_SIZE);
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.as_bytes(), &[0; 16]);
}

#[test]
fn test_basic_operations() {
    let mut s = SmallSet::new();

    s.insert(10);
    s.insert(42);

    assert!(s.contains(10));
    assert!(s.contains(42));
    assert!(!s.contains(11));
    assert!(!s.contains(41));

    assert_eq!(s.len(), 2);
    assert!(!s.is_empty());
}

#[test]
fn test_whole_universe() {
    let mut s = SmallSet::new();
    for i in 0..128u8 {
        assert!(!s.contains(i));
        assert!(s.insert(i));
        assert!(s.contains(i));
    }
    assert_eq!(s.len(), 128);
    assert_eq!(s.as_bytes(), &[0xff; 16]);
    assert_eq!(s.first(), Some(0));
    assert_eq!(s.last(), Some(127));
}

#[test]
fn test_outside_universe_is_never_a_member() {
    let s: SmallSet = (0..128).collect();
    assert!(!s.contains(128));
    assert!(!s.contains(255));
}

#[test]
#[should_panic(expected = "outside the universe")]
fn test_insert_outside_universe_panics() {
    let mut s = SmallSet::new();
    s.insert(128);
}

#[test]
fn test_remove_outside_universe_is_noop() {
    let mut s = set![1];
    assert!(!s.remove(200));
    assert_eq!(s, set![1]);
}

#[test]
fn test_insert_remove_return_values() {
    let mut s = SmallSet::new();
    assert!(s.insert(7));
    assert!(!s.insert(7));
    assert!(s.remove(7));
    assert!(!s.remove(7));
    assert!(s.is_empty());
}

#[test]
fn test_clear() {
    let mut s = set![0, 63, 64, 127];
    s.clear();
    assert!(s.is_empty());
    assert_eq!(s, SmallSet::new());
}

#[test]
fn test_load_from_replaces_contents() {
    let mut s = set![100, 101];
    s.load_from([3, 5, 9]);
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![3, 5, 9]);

    s.load_from([]);
    assert!(s.is_empty());
}

#[test]
fn test_load_from_duplicates() {
    let mut once = SmallSet::new();
    once.load_from([3, 5, 9]);

    let mut twice = SmallSet::new();
    twice.load_from([9, 3, 5, 3, 9, 9]);
    twice.load_from([9, 3, 5, 3, 9, 9]);

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 3);
}

#[test]
fn test_bit_layout() {
    let s = set![0, 7, 8, 127];
    let bytes = s.as_bytes();
    assert_eq!(bytes[0], 0b1000_0001);
    assert_eq!(bytes[1], 0b0000_0001);
    assert_eq!(bytes[15], 0b1000_0000);
    assert_eq!(SmallSet::from_bytes(*bytes), s);
}

#[test]
fn test_iterators() {
    let s = set![1, 5, 10, 127];

    let members: Vec<u8> = s.iter().collect();
    assert_eq!(members, vec![1, 5, 10, 127]);

    let rev: Vec<u8> = s.iter().rev().collect();
    assert_eq!(rev, vec![127, 10, 5, 1]);

    assert_eq!(s.iter().len(), 4);
}

#[test]
fn test_iterator_meets_in_the_middle() {
    let s = set![1, 2, 3, 4];
    let mut it = s.iter();
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(4));
    assert_eq!(it.len(), 2);
    assert_eq!(it.next_back(), Some(3));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn test_into_iterator() {
    let s = set![2, 7];

    let borrowed: Vec<u8> = (&s).into_iter().collect();
    let owned: Vec<u8> = s.into_iter().collect();
    assert_eq!(borrowed, vec![2, 7]);
    assert_eq!(owned, vec![2, 7]);
}

#[test]
fn test_extend() {
    let mut s = set![1];
    s.extend(vec![3, 5, 7]);
    s.extend(&[9u8, 11]);
    assert_eq!(s, set![1, 3, 5, 7, 9, 11]);
}

#[test]
fn test_union() {
    let a = set![1, 3];
    let b = set![2, 3];

    assert_eq!(a.union(&b), set![1, 2, 3]);
    assert_eq!(a | b, set![1, 2, 3]);

    let mut c = a;
    c.union_with(&b);
    assert_eq!(c, set![1, 2, 3]);
}

#[test]
fn test_intersection() {
    let a = set![1, 3];
    let b = set![2, 3];

    assert_eq!(a.intersection(&b), set![3]);
    assert_eq!(a & b, set![3]);

    let mut c = a;
    c &= b;
    assert_eq!(c, set![3]);
}

#[test]
fn test_difference() {
    let a = set![1, 3];
    let b = set![2, 3];

    assert_eq!(a.difference(&b), set![1]);
    assert_eq!(b - a, set![2]);

    let mut c = a;
    c -= b;
    assert_eq!(c, set![1]);
}

#[test]
fn test_symmetric_difference() {
    let a = set![1, 3];
    let b = set![2, 3];

    assert_eq!(a.symmetric_difference(&b), set![1, 2]);
    assert_eq!(a ^ b, set![1, 2]);

    let mut c = a;
    c ^= b;
    assert_eq!(c, set![1, 2]);
}

#[test]
fn test_set_op_apply_matches_methods() {
    let a = set![0, 10, 64, 127];
    let b = set![10, 11, 127];

    assert_eq!(SetOp::Union.apply(&a, &b), a.union(&b));
    assert_eq!(SetOp::Intersect.apply(&a, &b), a.intersection(&b));
    assert_eq!(SetOp::Sub.apply(&a, &b), a.difference(&b));
    assert_eq!(SetOp::SymDiff.apply(&a, &b), a.symmetric_difference(&b));
}

#[test]
fn test_set_op_with_itself() {
    let a = set![4, 8, 15, 16, 23, 42];

    assert_eq!(SetOp::Union.apply(&a, &a), a);
    assert_eq!(SetOp::Intersect.apply(&a, &a), a);
    assert!(SetOp::Sub.apply(&a, &a).is_empty());
    assert!(SetOp::SymDiff.apply(&a, &a).is_empty());
}

#[test]
fn test_subset_superset_disjoint() {
    let small = set![1, 2];
    let big = set![1, 2, 3];
    let other = set![4, 5];

    assert!(small.is_subset(&big));
    assert!(!big.is_subset(&small));
    assert!(big.is_superset(&small));
    assert!(small.is_disjoint(&other));
    assert!(!small.is_disjoint(&big));
    assert!(SmallSet::new().is_subset(&small));
}

#[test]
fn test_display_single_row() {
    assert_eq!(set![3, 5, 9].to_string(), "3, 5, 9");
    assert_eq!(set![0].to_string(), "0");
    assert_eq!(SmallSet::new().to_string(), "");
}

#[test]
fn test_display_rows_of_sixteen() {
    let sixteen: SmallSet = (0..16).collect();
    assert_eq!(
        sixteen.to_string(),
        "0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15"
    );

    let all: SmallSet = (0..128).collect();
    let text = all.to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|row| row.split(", ").count() == 16));
    assert_eq!(
        rows[7],
        "112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127"
    );
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", set![3, 5, 9]), "{3, 5, 9}");
    assert_eq!(format!("{:?}", SmallSet::new()), "{}");
}

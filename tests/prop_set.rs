use proptest::prelude::*;
use setcalc::{Command, SetOp, SmallSet, parse_command};

// Strategy for generating sets from arbitrary member lists
prop_compose! {
    fn arb_set()
        (members in prop::collection::vec(0u8..128, 0..64))
        -> SmallSet
    {
        members.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn test_insert_then_contains(
        members in prop::collection::vec(0u8..128, 0..64),
        n in 0u8..128
    ) {
        let mut s = SmallSet::new();
        s.load_from(members.iter().copied());
        s.insert(n);

        for i in 0u8..128 {
            let expected = i == n || members.contains(&i);
            prop_assert_eq!(s.contains(i), expected, "membership of {} mismatch", i);
        }
    }

    #[test]
    fn test_load_from_idempotent(members in prop::collection::vec(0u8..128, 0..64)) {
        let mut once = SmallSet::new();
        once.load_from(members.iter().copied());

        let mut twice = once;
        twice.load_from(members.iter().copied());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_union_membership(a in arb_set(), b in arb_set()) {
        let c = a.union(&b);
        for n in 0u8..128 {
            prop_assert_eq!(c.contains(n), a.contains(n) || b.contains(n));
        }
    }

    #[test]
    fn test_every_op_matches_predicate(a in arb_set(), b in arb_set()) {
        for op in SetOp::ALL {
            let c = op.apply(&a, &b);
            for n in 0u8..128 {
                prop_assert_eq!(
                    c.contains(n),
                    op.holds(a.contains(n), b.contains(n)),
                    "{} disagrees at {}",
                    op,
                    n
                );
            }
        }
    }

    #[test]
    fn test_symdiff_is_union_minus_intersection(a in arb_set(), b in arb_set()) {
        let expected = a.union(&b).difference(&a.intersection(&b));
        prop_assert_eq!(a.symmetric_difference(&b), expected);
    }

    #[test]
    fn test_iter_is_sorted_and_counted(s in arb_set()) {
        let members: Vec<u8> = s.iter().collect();
        prop_assert!(members.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(members.len(), s.len());

        let mut rev: Vec<u8> = s.iter().rev().collect();
        rev.reverse();
        prop_assert_eq!(rev, members);
    }

    #[test]
    fn test_display_lists_members(s in arb_set()) {
        let text = s.to_string();
        let listed: Vec<u8> = text
            .split(|c: char| c == ',' || c == '\n')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| t.parse().unwrap())
            .collect();
        prop_assert_eq!(listed, s.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_read_command_collects_members(members in prop::collection::vec(0u8..128, 0..40)) {
        let mut line = String::from("read_set SETE");
        for n in &members {
            line.push_str(&format!(", {n}"));
        }
        line.push_str(", -1");

        let command = parse_command(&line);
        prop_assert_eq!(
            command,
            Ok(Command::Read { target: setcalc::SetName::SetE, members: members.clone() })
        );
    }

    #[test]
    fn test_out_of_range_members_rejected(n in 128u32..100_000) {
        let line = format!("read_set SETA, 1, {n}, -1");
        prop_assert_eq!(parse_command(&line), Err(setcalc::CommandError::OutOfRange));
    }

    #[test]
    fn test_parse_never_panics(line in "[ -~\t]{0,60}") {
        let _ = parse_command(&line);
    }
}

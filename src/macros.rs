macro_rules! bitpos {
    ($idx:expr) => {{
        let idx = $idx;
        (idx >> 3, idx & 7)
    }};
}

pub(crate) use bitpos;

/// Creates a [`SmallSet`](crate::SmallSet) containing the given members.
///
/// Duplicates are allowed and collapse into a single member.
///
/// # Panics
///
/// Panics if any member is outside the universe `0..128`.
///
/// # Examples
///
/// ```
/// use setcalc::set;
///
/// let s = set![3, 5, 9, 5];
/// assert_eq!(s.len(), 3);
/// assert!(s.contains(9));
///
/// let empty = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::SmallSet::new()
    };
    ($($member:expr),+ $(,)?) => {{
        let mut s = $crate::SmallSet::new();
        $(
            s.insert($member);
        )+
        s
    }};
}

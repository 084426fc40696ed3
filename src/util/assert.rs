//! Invariant checks that stay on in release builds.
//!
//! These are for conditions that can only fail through a bug inside this crate. Anything a caller
//! can trigger with bad input goes through [`GeomError`](crate::core::error::GeomError) instead.

pub fn assert_partial_ord<T: PartialOrd>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check {
    ($cond:expr $(, $extra:expr)?) => {{
        let value = $cond;
        $crate::util::assert::assert_type::<bool>(&value);
        if !value {
            #[allow(unused_mut)]
            let mut msg = format!(
                "check failed: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($cond),
            );
            $( msg = format!("{msg}: {}", $extra); )?
            panic!("{msg}");
        }
    }};
}
#[allow(unused_imports)]
pub use check;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr $(, $extra:expr)?) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        $crate::util::assert::assert_partial_ord(&lhs);
        if !(lhs <= rhs) {
            #[allow(unused_mut)]
            let mut msg = format!(
                "check failed: {}: {} <= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs,
            );
            $( msg = format!("{msg}: {}", $extra); )?
            panic!("{msg}");
        }
    }};
}
#[allow(unused_imports)]
pub use check_le;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr $(, $extra:expr)?) => {{
        let lhs = $lhs;
        let rhs = $rhs;
        $crate::util::assert::assert_same_type(&lhs, &rhs);
        if lhs != rhs {
            #[allow(unused_mut)]
            let mut msg = format!(
                "check failed: {}: {} == {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs,
            );
            $( msg = format!("{msg}: {}", $extra); )?
            panic!("{msg}");
        }
    }};
}
#[allow(unused_imports)]
pub use check_eq;

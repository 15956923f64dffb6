//! Capability queries.
//!
//! Queries never fail. An error without the capability asked about yields
//! the zero value: `false`, an empty code or a status of `0`.

use crate::{AsCapabilities, cause};

/// Whether the cause of `err` has any of `codes`.
pub fn has_code<E: AsCapabilities + ?Sized>(err: &E, codes: &[&str]) -> bool {
    let Some(err) = cause(err) else {
        return false;
    };
    match err.as_coder() {
        Some(coder) => {
            let code = coder.code();
            codes.iter().any(|&want| want == code)
        }
        None => false,
    }
}

/// The string code of the cause of `err`, or `""` if it has none.
///
/// An empty code cannot be told apart from a missing one.
pub fn code<E: AsCapabilities + ?Sized>(err: &E) -> &str {
    cause(err)
        .and_then(|err| err.as_coder())
        .map_or("", |coder| coder.code())
}

/// Whether the cause of `err` has any of `statuses`.
///
/// [`StatusCoder`](crate::StatusCoder) and [`Statuser`](crate::Statuser) are
/// checked independently; a match from either one is enough.
pub fn has_status<E: AsCapabilities + ?Sized>(err: &E, statuses: &[i32]) -> bool {
    let Some(err) = cause(err) else {
        return false;
    };
    if let Some(coder) = err.as_status_coder() {
        if statuses.contains(&coder.status_code()) {
            return true;
        }
    }
    if let Some(statuser) = err.as_statuser() {
        if statuses.contains(&statuser.status()) {
            return true;
        }
    }
    false
}

/// The status of the cause of `err`, or `0` if it has none.
///
/// [`StatusCoder`](crate::StatusCoder) wins over
/// [`Statuser`](crate::Statuser) when both are implemented.
pub fn status<E: AsCapabilities + ?Sized>(err: &E) -> i32 {
    let Some(err) = cause(err) else {
        return 0;
    };
    if let Some(coder) = err.as_status_coder() {
        return coder.status_code();
    }
    err.as_statuser().map_or(0, |statuser| statuser.status())
}

/// Whether the operation that failed with `err` may succeed if retried.
pub fn is_temporary<E: AsCapabilities + ?Sized>(err: &E) -> bool {
    cause(err)
        .and_then(|err| err.as_temporary())
        .is_some_and(|temporary| temporary.temporary())
}

/// Whether the message of `err` may be shown to a requesting client.
///
/// Unlike the other queries this tests `err` as given, without resolving
/// its cause. Wrapping a public error with context yields an error that is
/// not public, since the context may leak implementation details; call
/// [`cause`] first to test the original error.
pub fn is_public<E: AsCapabilities + ?Sized>(err: &E) -> bool {
    err.as_capabilities()
        .and_then(|err| err.as_publicer())
        .is_some_and(|publicer| publicer.public())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{self, Error};
    use crate::{Capabilities, StatusCoder, Statuser, public, public_with_code};
    use rstest::rstest;

    #[derive(Debug, thiserror::Error)]
    #[error("testing status error")]
    struct TestingStatus(i32);

    impl Statuser for TestingStatus {
        fn status(&self) -> i32 {
            self.0
        }
    }

    crate::capabilities!(TestingStatus: Statuser);

    #[derive(Debug, thiserror::Error)]
    #[error("both status accessors")]
    struct SplitStatus;

    impl StatusCoder for SplitStatus {
        fn status_code(&self) -> i32 {
            500
        }
    }

    impl Statuser for SplitStatus {
        fn status(&self) -> i32 {
            503
        }
    }

    crate::capabilities!(SplitStatus: StatusCoder, Statuser);

    #[rstest]
    #[case::code_not_listed(public_with_code("test error", 0, "CODE"), &["A", "B", "C"], false, "CODE")]
    #[case::code_listed(public_with_code("test error", 0, "CODE"), &["A", "B", "CODE"], true, "CODE")]
    #[case::blank_code(public_with_code("test error", 0, ""), &["A", "B", "C"], false, "")]
    #[case::no_coder(Box::new(Error::new("test error")), &["A", "B", "C"], false, "")]
    fn test_code(
        #[case] err: crate::BoxError,
        #[case] codes: &[&str],
        #[case] want: bool,
        #[case] want_code: &str,
    ) {
        assert_eq!(has_code(&err, codes), want);
        assert_eq!(code(&err), want_code);

        let wrapped = Error::wrap(err).with("a", "b");
        assert_eq!(has_code(&wrapped, codes), want);
        assert_eq!(code(&wrapped), want_code);
    }

    #[test]
    fn test_code_match_is_case_sensitive() {
        let err = public_with_code("test error", 400, "CODE");
        assert!(!has_code(&err, &["code"]));
    }

    #[rstest]
    #[case::status_not_listed(public("test error", 501), &[400, 401, 402], false, 501)]
    #[case::status_listed(public("test error", 501), &[500, 501], true, 501)]
    #[case::statuser_not_listed(Box::new(TestingStatus(501)), &[400, 401, 402], false, 501)]
    #[case::statuser_listed(Box::new(TestingStatus(402)), &[400, 401, 402], true, 402)]
    #[case::no_status(Box::new(Error::new("no status")), &[400], false, 0)]
    fn test_status(
        #[case] err: crate::BoxError,
        #[case] statuses: &[i32],
        #[case] want: bool,
        #[case] want_status: i32,
    ) {
        assert_eq!(has_status(&err, statuses), want);
        assert_eq!(status(&err), want_status);

        let wrapped = chain::wrap(err, "wrapped").with("a", "b");
        assert_eq!(has_status(&wrapped, statuses), want);
        assert_eq!(status(&wrapped), want_status);
    }

    #[test]
    fn test_status_accessors_checked_independently() {
        assert!(has_status(&SplitStatus, &[503]));
        assert!(has_status(&SplitStatus, &[500]));
        assert!(!has_status(&SplitStatus, &[404]));
        assert_eq!(status(&SplitStatus), 500);
    }

    #[test]
    fn test_queries_on_none() {
        let none: Option<&dyn Capabilities> = None;
        assert!(!has_code(&none, &["X"]));
        assert_eq!(code(&none), "");
        assert!(!has_status(&none, &[1]));
        assert_eq!(status(&none), 0);
        assert!(!is_temporary(&none));
        assert!(!is_public(&none));
    }

    #[test]
    fn test_is_public_does_not_resolve_cause() {
        let err = public("public", 400);
        assert!(is_public(&err));

        let wrapped = chain::wrap(err, "wrapped");
        assert!(!is_public(&wrapped));
        assert!(is_public(&cause(&wrapped)));
    }
}

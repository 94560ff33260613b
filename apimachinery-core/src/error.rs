//! Error handling in [`apimachinery_core`][crate]
use thiserror::Error;

pub use crate::{
    gvk::{FormatGroupVersionError, ParseGroupVersionError},
    scheme::SchemeError,
};

/// Possible errors when working with api identities and the [`Scheme`](crate::Scheme)
///
/// Every failure here points at a static or configuration defect; none of them is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A group version string did not have the `group/version` shape
    #[error("ParseGroupVersion: {0}")]
    ParseGroupVersion(#[from] ParseGroupVersionError),

    /// A group version could not be written in a form that parses back
    #[error("FormatGroupVersion: {0}")]
    FormatGroupVersion(#[from] FormatGroupVersionError),

    /// Registration or lookup in a scheme failed
    #[error("SchemeError: {0}")]
    Scheme(#[from] SchemeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GroupVersion;

    fn api_version_of(gv: &str) -> crate::Result<String> {
        let gv: GroupVersion = gv.parse()?;
        Ok(gv.checked_api_version()?)
    }

    #[test]
    fn converts_from_concern_errors() {
        assert_eq!(api_version_of("apps/v1").unwrap(), "apps/v1");
        let err = api_version_of("a/b/c").unwrap_err();
        assert_eq!(err.to_string(), "ParseGroupVersion: unexpected GroupVersion string: a/b/c");

        let err: Error = GroupVersion::gv("a/b", "v1").checked_api_version().unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "FormatGroupVersion: illegal GroupVersion a/b/v1: contains more than one /"
        );
    }
}

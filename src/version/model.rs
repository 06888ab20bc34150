use std::fmt;

/// A version string split into its loosely-typed parts.
///
/// `prefix`, `prerelease` and `tag` are kept verbatim. Only `segments` is
/// interpreted, as plain integers, so leading zeros in segment text are not
/// preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Version {
    pub prefix: String,
    pub segments: Vec<u64>,
    pub prerelease: String,
    pub tag: String,
}

impl Version {
    pub fn has_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.tag.is_empty() {
            write!(f, "+{}", self.tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_all_parts() {
        let version = Version {
            prefix: "v".to_owned(),
            segments: vec![1, 2, 3],
            prerelease: "rc.1".to_owned(),
            tag: "build.5".to_owned(),
        };
        assert_eq!(version.to_string(), "v1.2.3-rc.1+build.5");
    }

    #[test]
    fn display_omits_empty_prerelease_and_tag() {
        let version = Version {
            segments: vec![7],
            ..Version::default()
        };
        assert_eq!(version.to_string(), "7");
        assert!(!version.has_prerelease());
    }
}

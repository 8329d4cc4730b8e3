use std::fmt;

/// Release the changelog is generated for.
///
/// Keeps the name exactly as given on the command line (it is also the tag
/// name looked up downstream) next to its parsed semantic version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion {
    name: String,
    version: semver::Version,
}

impl TargetVersion {
    /// Parses a release name such as `v1.2.3` or `1.2.3-rc.1+build.5`.
    ///
    /// A single leading `v` is accepted; the rest must be a complete
    /// MAJOR.MINOR.PATCH version with optional pre-release and build parts.
    ///
    /// # Example
    /// ```
    /// use gchl::version::TargetVersion;
    ///
    /// let v = TargetVersion::parse("v1.2.3").unwrap();
    /// assert_eq!(v.name(), "v1.2.3");
    /// assert_eq!(v.version().major, 1);
    /// assert!(TargetVersion::parse("banana").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self, semver::Error> {
        let bare = name.strip_prefix('v').unwrap_or(name);
        let version = semver::Version::parse(bare)?;

        Ok(TargetVersion {
            name: name.to_string(),
            version,
        })
    }

    /// Release name as supplied
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &semver::Version {
        &self.version
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//! Storage paths.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The domain segment of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathDomain {
    Storage,
    Private,
    Public,
}

impl PathDomain {
    /// Returns the domain as it appears in path text.
    pub fn as_str(self) -> &'static str {
        match self {
            PathDomain::Storage => "storage",
            PathDomain::Private => "private",
            PathDomain::Public => "public",
        }
    }
}

impl FromStr for PathDomain {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "storage" => Ok(PathDomain::Storage),
            "private" => Ok(PathDomain::Private),
            "public" => Ok(PathDomain::Public),
            _ => Err(ValueError::UnknownPathDomain {
                domain: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PathDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A storage locator: a domain plus an identifier, written `/domain/identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    pub domain: PathDomain,
    pub identifier: String,
}

impl Path {
    /// Creates a path from its parts.
    pub fn new(domain: PathDomain, identifier: impl Into<String>) -> Self {
        Self {
            domain,
            identifier: identifier.into(),
        }
    }

    /// Parses `/domain/identifier`.
    ///
    /// The text must split on `/` into exactly three segments: an empty
    /// leading segment, a known domain and a non-empty identifier.
    pub fn parse(s: &str) -> Result<Self, ValueError> {
        let malformed = || ValueError::MalformedPath {
            input: s.to_string(),
        };

        let mut parts = s.split('/');
        let (Some(""), Some(domain), Some(identifier), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if identifier.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(domain.parse()?, identifier))
    }
}

impl FromStr for Path {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.domain, self.identifier)
    }
}

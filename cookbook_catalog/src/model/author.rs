use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

use cookbook_common::id::Id;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct AuthorId(pub Id);

impl AuthorId {
    pub fn new<T: Into<Id>>(id: T) -> Self {
        Self(id.into())
    }

    pub fn to_name(&self) -> String {
        format!("authors/{}", self.0)
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.to_name().fmt(f)
    }
}

/// A catalog author.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Author {
    id: AuthorId,
    name: String,
    email: String,
}

impl Author {
    pub fn new<N, E>(id: AuthorId, name: N, email: E) -> Self
    where
        N: Into<String>,
        E: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Author {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Author {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_equality() {
        let a = Author::new(AuthorId::new(1u128), "Alex", "alex@gmail.com");
        let b = Author::new(AuthorId::new(2u128), "Alex", "alex@gmail.com");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert!(a < b);
    }

    #[test]
    fn display() {
        let author = Author::new(AuthorId::new(1u128), "Alex", "alex@gmail.com");
        assert_eq!(author.to_string(), "Alex <alex@gmail.com>");
        assert!(author.id().to_string().starts_with("authors/"));
    }
}

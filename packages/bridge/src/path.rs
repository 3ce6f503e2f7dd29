//! Request path type with percent-decoded, traversal-checked components.

use std::fmt;

use percent_encoding::percent_decode_str;

/// Errors related to request path parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetPathError {
    /// A path component is empty after decoding, a dot segment, or
    /// contains a separator or NUL.
    InvalidComponent {
        component: String,
        position: usize,
        message: String,
    },
    /// The path string is invalid as a whole.
    InvalidPath { message: String },
}

impl fmt::Display for AssetPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetPathError::InvalidComponent {
                component,
                position,
                message,
            } => {
                write!(
                    f,
                    "invalid path component '{}' at position {}: {}",
                    component, position, message
                )
            }
            AssetPathError::InvalidPath { message } => {
                write!(f, "invalid path: {}", message)
            }
        }
    }
}

impl std::error::Error for AssetPathError {}

/// A validated request path under the virtual origin.
///
/// Components are percent-decoded and checked at parse time: dot
/// segments (`.` and `..`) and components that decode to contain a
/// separator or NUL are rejected outright, so a path that parses can be
/// resolved against a bundle without any further traversal checks.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AssetPath {
    components: Vec<String>,
}

impl AssetPath {
    /// Parse a URL path string, validating and decoding components.
    ///
    /// # Path Syntax
    ///
    /// - Components are separated by `/`
    /// - Empty components are ignored (normalizes `//`, leading and
    ///   trailing `/`)
    /// - Components are percent-decoded before validation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use webkiosk_bridge::AssetPath;
    ///
    /// let path = AssetPath::parse("/assets/js/app.js").unwrap();
    /// assert_eq!(path.len(), 3);
    ///
    /// // Traversal is rejected, including when percent-encoded
    /// assert!(AssetPath::parse("/assets/../secret").is_err());
    /// assert!(AssetPath::parse("/assets/%2e%2e/secret").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, AssetPathError> {
        let mut components = Vec::new();

        for (i, raw) in s.split('/').filter(|c| !c.is_empty()).enumerate() {
            let decoded = percent_decode_str(raw).decode_utf8().map_err(|_| {
                AssetPathError::InvalidComponent {
                    component: raw.to_string(),
                    position: i,
                    message: "not valid UTF-8 after percent-decoding".to_string(),
                }
            })?;
            Self::validate_component(&decoded, i)?;
            components.push(decoded.into_owned());
        }

        Ok(AssetPath { components })
    }

    /// The empty (root) path.
    pub fn root() -> Self {
        AssetPath {
            components: Vec::new(),
        }
    }

    /// Validate a single decoded path component.
    fn validate_component(component: &str, position: usize) -> Result<(), AssetPathError> {
        let message = if component.is_empty() {
            Some("empty component")
        } else if component == "." || component == ".." {
            Some("dot segments are not allowed")
        } else if component.contains(['/', '\\']) {
            Some("separator in decoded component")
        } else if component.contains('\0') {
            Some("NUL in decoded component")
        } else {
            None
        };

        match message {
            Some(message) => Err(AssetPathError::InvalidComponent {
                component: component.to_string(),
                position,
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Check if this path is empty (the origin root).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// Components as string slices, in order.
    pub fn as_components(&self) -> Vec<&str> {
        self.components.iter().map(String::as_str).collect()
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &AssetPath) -> AssetPath {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        AssetPath { components }
    }

    /// Check if this path has the given prefix.
    pub fn has_prefix(&self, prefix: &AssetPath) -> bool {
        prefix.components.len() <= self.components.len()
            && prefix.components == self.components[..prefix.components.len()]
    }

    /// Strip a prefix from this path.
    ///
    /// Returns `None` if the prefix doesn't match.
    #[must_use]
    pub fn strip_prefix(&self, prefix: &AssetPath) -> Option<AssetPath> {
        if self.has_prefix(prefix) {
            Some(AssetPath {
                components: self.components[prefix.components.len()..].to_vec(),
            })
        } else {
            None
        }
    }

    /// The file extension of the last component, if any.
    ///
    /// A leading dot does not start an extension, so `.htaccess` has
    /// none.
    pub fn extension(&self) -> Option<&str> {
        let last = self.components.last()?;
        match last.rfind('.') {
            Some(idx) if idx > 0 => Some(&last[idx + 1..]),
            _ => None,
        }
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

impl std::ops::Index<usize> for AssetPath {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

/// Macro for creating asset paths from literals.
///
/// # Example
///
/// ```rust
/// use webkiosk_bridge::asset_path;
///
/// let p = asset_path!("assets/js/app.js");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! asset_path {
    ($s:expr) => {
        $crate::AssetPath::parse($s).expect("invalid asset path literal")
    };
}

use std::fmt;

/// Provenance of a type record. Only used to rank competing claims on the
/// same extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Source {
    Apache,
    Iana,
    Nginx,
    #[default]
    Unknown,
}

impl Source {
    /// Preference rank, lowest first: nginx < apache < unknown < iana.
    pub fn rank(self) -> u8 {
        match self {
            Source::Nginx => 0,
            Source::Apache => 1,
            Source::Unknown => 2,
            Source::Iana => 3,
        }
    }

    /// Case-insensitive parse. Anything unrecognised is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "apache" => Source::Apache,
            "iana" => Source::Iana,
            "nginx" => Source::Nginx,
            _ => Source::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Source::Apache => "apache",
            Source::Iana => "iana",
            Source::Nginx => "nginx",
            Source::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of the mime database, keyed elsewhere by its canonical type name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeDescriptor {
    pub source: Source,
    /// Extensions without the leading dot. The first one is preferred.
    pub extensions: Vec<String>,
    /// Advisory only; no lookup depends on it.
    pub compressible: bool,
    /// Explicit charset, empty when the database gives none.
    pub charset: String,
}

impl TypeDescriptor {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    pub fn with_compressible(mut self, compressible: bool) -> Self {
        self.compressible = compressible;
        self
    }

    pub fn preferred_extension(&self) -> Option<&str> {
        self.extensions.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_rank_orders_nginx_lowest_and_iana_highest() {
        assert!(Source::Nginx.rank() < Source::Apache.rank());
        assert!(Source::Apache.rank() < Source::Unknown.rank());
        assert!(Source::Unknown.rank() < Source::Iana.rank());
    }

    #[test]
    fn source_from_name_is_case_insensitive() {
        assert_eq!(Source::from_name("IANA"), Source::Iana);
        assert_eq!(Source::from_name("Apache"), Source::Apache);
        assert_eq!(Source::from_name("nginx"), Source::Nginx);
        assert_eq!(Source::from_name("custom"), Source::Unknown);
    }

    #[test]
    fn descriptor_defaults() {
        let d = TypeDescriptor::default();
        assert_eq!(d.source, Source::Unknown);
        assert!(d.extensions.is_empty());
        assert!(!d.compressible);
        assert_eq!(d.charset, "");
        assert_eq!(d.preferred_extension(), None);
    }

    #[test]
    fn descriptor_builder_keeps_extension_order() {
        let d = TypeDescriptor::new(Source::Iana).with_extensions(["jpeg", "jpg", "jpe"]);
        assert_eq!(d.preferred_extension(), Some("jpeg"));
        assert_eq!(d.extensions, vec!["jpeg", "jpg", "jpe"]);
    }
}

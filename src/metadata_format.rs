//! Metadata formats a repository can disseminate.

use serde::{Deserialize, Serialize};

/// A metadata format descriptor as listed by `ListMetadataFormats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFormat {
    pub metadata_prefix: String,
    pub schema: String,
    pub metadata_namespace: String,
}

impl MetadataFormat {
    pub fn new(
        metadata_prefix: impl Into<String>,
        schema: impl Into<String>,
        metadata_namespace: impl Into<String>,
    ) -> Self {
        Self {
            metadata_prefix: metadata_prefix.into(),
            schema: schema.into(),
            metadata_namespace: metadata_namespace.into(),
        }
    }

    /// Unqualified Dublin Core, which every OAI-PMH repository must support.
    pub fn oai_dc() -> Self {
        Self::new(
            "oai_dc",
            "http://www.openarchives.org/OAI/2.0/oai_dc.xsd",
            "http://www.openarchives.org/OAI/2.0/oai_dc/",
        )
    }
}

/// Ordered set of formats keyed by prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFormatRegistry {
    formats: Vec<MetadataFormat>,
}

impl Default for MetadataFormatRegistry {
    fn default() -> Self {
        Self {
            formats: vec![MetadataFormat::oai_dc()],
        }
    }
}

impl MetadataFormatRegistry {
    /// A registry with no formats at all.
    pub fn empty() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Add a format, replacing any existing format with the same prefix.
    pub fn register(&mut self, format: MetadataFormat) {
        match self
            .formats
            .iter_mut()
            .find(|f| f.metadata_prefix == format.metadata_prefix)
        {
            Some(existing) => *existing = format,
            None => self.formats.push(format),
        }
    }

    pub fn with_format(mut self, format: MetadataFormat) -> Self {
        self.register(format);
        self
    }

    pub fn get(&self, prefix: &str) -> Option<&MetadataFormat> {
        self.formats.iter().find(|f| f.metadata_prefix == prefix)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.get(prefix).is_some()
    }

    pub fn formats(&self) -> &[MetadataFormat] {
        &self.formats
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
